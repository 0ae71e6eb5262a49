use std::{collections::HashMap, fmt::Display};

use log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::resolver::VariableResolver,
        lexer::LexerOptions,
        parser::core::{ParseResult, parse_with},
        value::complex::ComplexNumber,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default tolerance used by [`compare`].
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Stores the runtime evaluation context.
///
/// Holds the environment: the values of the free variables resolved so far.
/// A context belongs to a single expression and is never shared, so the same
/// name in two expressions is resolved twice, independently.
#[derive(Debug, Default)]
pub struct Context {
    /// Variables resolved so far, keyed by name.
    pub environment: HashMap<char, ComplexNumber>,
}

impl Context {
    /// Creates a context with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// Children are evaluated left before right. A variable that is not yet
    /// in the environment is resolved through `resolver` and cached, so the
    /// resolver sees every name at most once per context.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `resolver`: Supplies the values of unresolved variables.
    ///
    /// # Returns
    /// The complex value of the expression.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] for division by `0+0i`.
    /// - [`RuntimeError::VariableResolution`] if the resolver fails.
    pub fn eval(&mut self,
                expr: &Expr,
                resolver: &mut dyn VariableResolver)
                -> EvalResult<ComplexNumber> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, .. } => self.eval_variable(*name, resolver),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr, resolver)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             column, } => {
                let left = self.eval(left, resolver)?;
                let right = self.eval(right, resolver)?;
                Self::eval_binary(*op, left, right, *column)
            },
        }
    }

    /// Looks a variable up in the environment, resolving and caching it on
    /// first use.
    fn eval_variable(&mut self,
                     name: char,
                     resolver: &mut dyn VariableResolver)
                     -> EvalResult<ComplexNumber> {
        if let Some(value) = self.environment.get(&name) {
            debug!("reusing {name} = {value}");
            return Ok(*value);
        }

        debug!("resolving {name}");
        let value = resolver.resolve(name)?;
        self.environment.insert(name, value);
        Ok(value)
    }
}

/// A parsed expression together with its own variable environment.
///
/// # Example
/// ```
/// use complexa::interpreter::{
///     evaluator::{core::Calculator, resolver::from_fn},
///     value::complex::ComplexNumber,
/// };
///
/// let mut calculator = Calculator::new("(1+2i)*(3-4i)").unwrap();
/// assert_eq!(calculator.tree().to_string(), "(* (+ 1 2i) (- 3 4i))");
///
/// let mut resolver = from_fn(|_| unreachable!());
/// assert_eq!(calculator.evaluate(&mut resolver).unwrap(),
///            ComplexNumber::new(11.0, 2.0));
/// ```
#[derive(Debug)]
pub struct Calculator {
    tree:    Expr,
    context: Context,
}

impl Calculator {
    /// Parses `source` with the default lexer options.
    ///
    /// # Errors
    /// Returns a [`crate::error::ParseError`] if `source` is not a valid
    /// expression.
    pub fn new(source: &str) -> ParseResult<Self> {
        Self::with_options(source, &LexerOptions::default())
    }

    /// Parses `source` with the given lexer options.
    ///
    /// # Errors
    /// Returns a [`crate::error::ParseError`] if `source` is not a valid
    /// expression.
    pub fn with_options(source: &str, options: &LexerOptions) -> ParseResult<Self> {
        Ok(Self::from_tree(parse_with(source, options)?))
    }

    /// Wraps an already parsed tree with a fresh environment.
    #[must_use]
    pub fn from_tree(tree: Expr) -> Self {
        Self { tree,
               context: Context::new() }
    }

    /// The parsed expression tree.
    #[must_use]
    pub const fn tree(&self) -> &Expr {
        &self.tree
    }

    /// The variables resolved so far.
    #[must_use]
    pub const fn environment(&self) -> &HashMap<char, ComplexNumber> {
        &self.context.environment
    }

    /// Evaluates the tree.
    ///
    /// Variables already resolved by an earlier call are reused, so evaluating
    /// twice gives the same value without asking `resolver` again.
    ///
    /// # Errors
    /// See [`Context::eval`].
    pub fn evaluate<R: VariableResolver>(&mut self,
                                         resolver: &mut R)
                                         -> EvalResult<ComplexNumber> {
        self.context.eval(&self.tree, resolver)
    }
}

/// Evaluates `expr` once, with a fresh environment.
///
/// # Errors
/// See [`Context::eval`].
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use complexa::interpreter::{
///     evaluator::core::evaluate,
///     parser::core::parse,
///     value::complex::ComplexNumber,
/// };
///
/// let tree = parse("x*x").unwrap();
/// let mut values = HashMap::from([('x', ComplexNumber::new(0.0, 1.0))]);
/// assert_eq!(evaluate(&tree, &mut values).unwrap(), ComplexNumber::new(-1.0, 0.0));
/// ```
pub fn evaluate<R: VariableResolver>(expr: &Expr, resolver: &mut R) -> EvalResult<ComplexNumber> {
    Context::new().eval(expr, resolver)
}

/// Outcome of comparing two results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The results differ by less than the tolerance.
    Equivalent,
    /// The results differ by the tolerance or more.
    Different,
}

impl Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equivalent => write!(f, "equivalent"),
            Self::Different => write!(f, "different"),
        }
    }
}

/// Compares two results: [`Comparison::Equivalent`] when `|a - b| <
/// tolerance`, [`Comparison::Different`] otherwise (including when either is
/// `NaN`).
///
/// # Example
/// ```
/// use complexa::interpreter::{
///     evaluator::core::{Comparison, DEFAULT_TOLERANCE, compare},
///     value::complex::ComplexNumber,
/// };
///
/// let two = ComplexNumber::new(2.0, 0.0);
/// let three = ComplexNumber::new(3.0, 0.0);
/// assert_eq!(compare(two, two, DEFAULT_TOLERANCE), Comparison::Equivalent);
/// assert_eq!(compare(two, three, DEFAULT_TOLERANCE), Comparison::Different);
/// ```
#[must_use]
pub fn compare(a: ComplexNumber, b: ComplexNumber, tolerance: f64) -> Comparison {
    if (a - b).abs() < tolerance {
        Comparison::Equivalent
    } else {
        Comparison::Different
    }
}

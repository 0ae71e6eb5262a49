use std::fmt::Display;

use crate::interpreter::value::complex::ComplexNumber;

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree is built once by the parser and never mutated afterwards. Every
/// node owns its children, and every node records the 1-based column of the
/// token it was built from, so evaluation errors can point back into the
/// source text.
///
/// The `Display` impl renders the diagnostic form: `(op left right)` for
/// binary nodes, `(op child)` for unary nodes, and the bare value or name for
/// leaves.
///
/// # Example
/// ```
/// use complexa::interpreter::parser::core::parse;
///
/// let tree = parse("(1+2i)*x").unwrap();
/// assert_eq!(tree.to_string(), "(* (+ 1 2i) x)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A resolved numeric constant.
    Literal {
        /// The constant value.
        value:  ComplexNumber,
        /// Column in the source text.
        column: usize,
    },
    /// Reference to a free variable by its single-letter name.
    Variable {
        /// Name of the variable.
        name:   char,
        /// Column in the source text.
        column: usize,
    },
    /// A unary function application (`√` or `conj`).
    UnaryOp {
        /// The function to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column in the source text.
        column: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column of the operator in the source text.
        column: usize,
    },
}

impl Expr {
    /// Returns the column this node was built from.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. }
            | Self::Variable { column, .. }
            | Self::UnaryOp { column, .. }
            | Self::BinaryOp { column, .. } => *column,
        }
    }

    /// Returns the distinct variable names in the order they are first
    /// evaluated, which is also the order a resolver is asked for them.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::parser::core::parse;
    ///
    /// let tree = parse("y*x + √y").unwrap();
    /// assert_eq!(tree.variables(), vec!['y', 'x']);
    /// ```
    #[must_use]
    pub fn variables(&self) -> Vec<char> {
        fn walk(expr: &Expr, seen: &mut Vec<char>) {
            match expr {
                Expr::Literal { .. } => {},
                Expr::Variable { name, .. } => {
                    if !seen.contains(name) {
                        seen.push(*name);
                    }
                },
                Expr::UnaryOp { expr, .. } => walk(expr, seen),
                Expr::BinaryOp { left, right, .. } => {
                    walk(left, seen);
                    walk(right, seen);
                },
            }
        }

        let mut seen = Vec::new();
        walk(self, &mut seen);
        seen
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({op} {left} {right})"),
        }
    }
}

/// Unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Principal square root: `√`
    Sqrt,
    /// Complex conjugate: `conj`
    Conj,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqrt => write!(f, "√"),
            Self::Conj => write!(f, "conj"),
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition: `+`
    Add,
    /// Subtraction: `-`
    Sub,
    /// Multiplication: `*`
    Mul,
    /// Division: `/`
    Div,
    /// Exponentiation: `**`
    Pow,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Pow => write!(f, "**"),
        }
    }
}

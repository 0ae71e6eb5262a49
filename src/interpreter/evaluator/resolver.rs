use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
};

use log::debug;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::complex::ComplexNumber},
};

/// Supplies values for free variables.
///
/// The evaluator calls [`VariableResolver::resolve`] at most once per name
/// and calculator; later references reuse the cached value. Calls happen in
/// evaluation order, left operand before right operand.
pub trait VariableResolver {
    /// Returns the value of the variable `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::VariableResolution`] when no value can be
    /// produced.
    fn resolve(&mut self, name: char) -> EvalResult<ComplexNumber>;
}

/// Resolves variables by asking on an output stream and reading one line per
/// variable from an input stream.
///
/// The answer is parsed with [`ComplexNumber`]'s `FromStr` impl, so `3`,
/// `1+2i`, `1-2i`, `2i`, `i` and `-i` are all accepted.
///
/// # Example
/// ```
/// use complexa::interpreter::{
///     evaluator::resolver::{PromptResolver, VariableResolver},
///     value::complex::ComplexNumber,
/// };
///
/// let mut prompts = Vec::new();
/// let mut resolver = PromptResolver::new("1-2i\n".as_bytes(), &mut prompts);
///
/// assert_eq!(resolver.resolve('z').unwrap(), ComplexNumber::new(1.0, -2.0));
/// drop(resolver);
/// assert_eq!(String::from_utf8(prompts).unwrap(), "Value for z: ");
/// ```
pub struct PromptResolver<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> PromptResolver<R, W> {
    /// Creates a resolver reading answers from `input` and writing prompts to
    /// `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptResolver<io::StdinLock<'static>, io::Stdout> {
    /// Creates a resolver that prompts on stdout and reads from stdin.
    ///
    /// Holds the stdin lock until dropped.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> VariableResolver for PromptResolver<R, W> {
    fn resolve(&mut self, name: char) -> EvalResult<ComplexNumber> {
        let io_failure = |e: io::Error| RuntimeError::VariableResolution { name,
                                                                           reason: e.to_string() };

        write!(self.output, "Value for {name}: ").map_err(io_failure)?;
        self.output.flush().map_err(io_failure)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(io_failure)? == 0 {
            return Err(RuntimeError::VariableResolution { name,
                                                          reason: "end of input".to_string() });
        }

        let value = line.parse::<ComplexNumber>().map_err(|e| {
                                                     RuntimeError::VariableResolution { name,
                                                                                        reason: e.to_string() }
                                                 })?;
        debug!("read {name} = {value}");
        Ok(value)
    }
}

/// Resolves variables by calling a closure. Created by [`from_fn`].
pub struct FnResolver<F> {
    f: F,
}

/// Wraps a closure as a [`VariableResolver`].
///
/// # Example
/// ```
/// use complexa::interpreter::{
///     evaluator::resolver::{VariableResolver, from_fn},
///     value::complex::ComplexNumber,
/// };
///
/// let mut resolver = from_fn(|name| Ok(ComplexNumber::new(f64::from(name as u8), 0.0)));
/// assert_eq!(resolver.resolve('a').unwrap(), ComplexNumber::new(97.0, 0.0));
/// ```
pub const fn from_fn<F>(f: F) -> FnResolver<F>
    where F: FnMut(char) -> EvalResult<ComplexNumber>
{
    FnResolver { f }
}

impl<F> VariableResolver for FnResolver<F> where F: FnMut(char) -> EvalResult<ComplexNumber>
{
    fn resolve(&mut self, name: char) -> EvalResult<ComplexNumber> {
        (self.f)(name)
    }
}

/// Resolves variables from a fixed table; unknown names fail.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use complexa::interpreter::{
///     evaluator::resolver::VariableResolver,
///     value::complex::ComplexNumber,
/// };
///
/// let mut values = HashMap::from([('x', ComplexNumber::new(2.0, 0.0))]);
/// assert!(values.resolve('x').is_ok());
/// assert!(values.resolve('y').is_err());
/// ```
impl VariableResolver for HashMap<char, ComplexNumber> {
    fn resolve(&mut self, name: char) -> EvalResult<ComplexNumber> {
        self.get(&name)
            .copied()
            .ok_or_else(|| RuntimeError::VariableResolution { name,
                                                              reason: "no value given".to_string() })
    }
}

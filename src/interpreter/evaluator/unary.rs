use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Context, value::complex::ComplexNumber},
};

impl Context {
    /// Applies a unary function to an already evaluated operand.
    ///
    /// - `Sqrt`: principal square root, with the argument taken in `(-π, π]`.
    /// - `Conj`: negates the imaginary part.
    ///
    /// # Example
    /// ```
    /// use complexa::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::complex::ComplexNumber},
    /// };
    ///
    /// let z = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Conj, z),
    ///            ComplexNumber::new(3.0, -4.0));
    /// assert_eq!(Context::eval_unary(UnaryOperator::Sqrt, ComplexNumber::new(-4.0, 0.0)),
    ///            ComplexNumber::new(0.0, 2.0));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: ComplexNumber) -> ComplexNumber {
        match op {
            UnaryOperator::Sqrt => value.sqrt(),
            UnaryOperator::Conj => value.conj(),
        }
    }
}

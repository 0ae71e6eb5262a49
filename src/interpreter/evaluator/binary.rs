use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::complex::ComplexNumber,
    },
};

impl Context {
    /// Evaluates a binary operation on two already evaluated operands.
    ///
    /// `+`, `-` and `*` are plain complex arithmetic. `/` fails with
    /// [`RuntimeError::DivisionByZero`] when the divisor is exactly `0+0i`.
    /// `**` follows [`ComplexNumber::pow`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `column`: Column of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use complexa::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::complex::ComplexNumber},
    /// };
    ///
    /// let a = ComplexNumber::new(1.0, 2.0);
    /// let b = ComplexNumber::new(3.0, -4.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mul, a, b, 1).unwrap(),
    ///            ComplexNumber::new(11.0, 2.0));
    ///
    /// let zero = ComplexNumber::new(0.0, 0.0);
    /// assert!(Context::eval_binary(BinaryOperator::Div, a, zero, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: ComplexNumber,
                       right: ComplexNumber,
                       column: usize)
                       -> EvalResult<ComplexNumber> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero { column });
                }
                Ok(left / right)
            },
            BinaryOperator::Pow => Ok(left.pow(right)),
        }
    }
}

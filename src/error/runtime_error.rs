#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by exactly `0+0i`.
    DivisionByZero {
        /// The column of the `/` operator.
        column: usize,
    },
    /// The resolver could not produce a value for a free variable.
    VariableResolution {
        /// The name of the variable.
        name:   char,
        /// Why resolution failed, e.g. the rejected input text.
        reason: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
            Self::VariableResolution { name, reason } => {
                write!(f, "Could not resolve variable '{name}': {reason}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

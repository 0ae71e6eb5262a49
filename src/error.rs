/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing or parsing an
/// expression: incomplete input, unbalanced parentheses, a malformed
/// `conj(...)`, unexpected or trailing tokens, and (in strict mode)
/// unrecognized characters.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while evaluating an expression tree:
/// division by zero and failures to resolve a free variable.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure from building or evaluating an expression.
///
/// Lets callers that drive both phases use a single `Result` and `?`.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression tree could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

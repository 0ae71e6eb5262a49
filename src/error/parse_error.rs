#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
///
/// Columns are 1-based character positions in the text the user typed,
/// whitespace included.
pub enum ParseError {
    /// The input ended where a number, variable or group was required.
    UnexpectedEndOfInput,
    /// Found a token that does not start any factor, including malformed
    /// numbers such as `1.2.3`.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column where the token starts.
        column: usize,
    },
    /// An opening parenthesis `(` is never closed.
    ExpectedClosingParen {
        /// The column of the unmatched `(`.
        column: usize,
    },
    /// `conj` is not immediately followed by `(`.
    ExpectedConjParen {
        /// The column of the `conj` keyword.
        column: usize,
    },
    /// The argument list of `conj(` is never closed.
    UnclosedConj {
        /// The column of the `conj` keyword.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The column where it starts.
        column: usize,
    },
    /// A character that belongs to no token, reported only in strict mode.
    UnrecognizedCharacter {
        /// The rejected character.
        character: char,
        /// The column of the character.
        column:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput => write!(f, "Incomplete expression."),

            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Error at column {column}: Parenthesis is never closed."),

            Self::ExpectedConjParen { column } => {
                write!(f, "Error at column {column}: Expected '(' after conj.")
            },

            Self::UnclosedConj { column } => {
                write!(f, "Error at column {column}: conj( is never closed.")
            },

            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                       "Error at column {column}: Extra tokens after expression, starting with: {token}"),

            Self::UnrecognizedCharacter { character, column } => write!(f,
                                                                        "Error at column {column}: Unrecognized character {character:?}."),
        }
    }
}

impl std::error::Error for ParseError {}

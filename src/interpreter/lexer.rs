use std::fmt::Display;

use log::{debug, trace};
use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in an expression.
///
/// Tokens are produced from whitespace-free text, so `1 2` lexes as the single
/// number `12`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `2.5` or `.5`.
    ///
    /// Any run of digits and dots is taken as one lexeme, so `1.2.3` is a
    /// single token; the parser rejects it when it fails to convert.
    #[regex(r"([0-9]|\.[0-9])[0-9.]*", |lex| lex.slice().to_string())]
    Number(String),
    /// Single-letter identifier tokens, such as `x`. The letter `i` is lexed
    /// here too and becomes the imaginary unit in the parser.
    Identifier(char),
    /// `conj`
    ///
    /// Shares its pattern with [`Token::Identifier`]: [`identifier_or_conj`]
    /// decides which one a letter starts.
    #[regex(r"\p{Alphabetic}", identifier_or_conj)]
    Conj,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `√`
    #[token("√")]
    Radical,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(lexeme) => write!(f, "{lexeme}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Conj => write!(f, "conj"),
            Self::DoubleStar => write!(f, "**"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Radical => write!(f, "√"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Tokenizer settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Reject characters that belong to no token instead of skipping them.
    pub strict: bool,
}

/// Turns a letter into [`Token::Conj`] when it starts the word `conj`, or
/// into a single-letter [`Token::Identifier`] otherwise.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer positioned after the letter.
///
/// # Returns
/// The token the letter starts.
fn identifier_or_conj(lex: &mut logos::Lexer<Token>) -> Token {
    if lex.slice() == "c" && lex.remainder().starts_with("onj") {
        lex.bump(3);
        return Token::Conj;
    }

    Token::Identifier(lex.slice().chars().next().unwrap_or_default())
}

/// Tokenizes an expression into `(Token, column)` pairs.
///
/// Whitespace is removed before lexing. Columns are 1-based character
/// positions in `source` itself, whitespace included.
///
/// Characters that belong to no token are skipped, unless
/// [`LexerOptions::strict`] is set, in which case the first one fails with
/// [`ParseError::UnrecognizedCharacter`].
///
/// A `+` or `-` at the start of the input or right after `(` is preceded by an
/// implicit `0`, so `-3` tokenizes like `0-3`.
///
/// # Example
/// ```
/// use complexa::interpreter::lexer::{LexerOptions, Token, tokenize};
///
/// let tokens = tokenize("-2i", &LexerOptions::default()).unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number("0".to_string()), 1),
///                 (Token::Minus, 1),
///                 (Token::Number("2".to_string()), 2),
///                 (Token::Identifier('i'), 3)]);
///
/// let strict = LexerOptions { strict: true };
/// assert!(tokenize("1 # 2", &strict).is_err());
/// ```
///
/// # Errors
/// Returns [`ParseError::UnrecognizedCharacter`] in strict mode only.
pub fn tokenize(source: &str, options: &LexerOptions) -> ParseResult<Vec<(Token, usize)>> {
    let (compact, columns) = strip_whitespace(source);

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&compact);

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        let column = columns[start];
        match token {
            Ok(tok) => {
                if matches!(tok, Token::Plus | Token::Minus) && starts_group(&compact, start) {
                    tokens.push((Token::Number("0".to_string()), column));
                }
                tokens.push((tok, column));
            },
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                if options.strict {
                    return Err(ParseError::UnrecognizedCharacter { character, column });
                }
                debug!("skipping unrecognized input {:?} at column {column}", lexer.slice());
            },
        }
    }

    trace!("tokens: {tokens:?}");
    Ok(tokens)
}

/// Removes all whitespace from `source`.
///
/// # Returns
/// The compacted text and, for every byte of it, the 1-based column of the
/// character it came from in `source`.
fn strip_whitespace(source: &str) -> (String, Vec<usize>) {
    let mut compact = String::with_capacity(source.len());
    let mut columns = Vec::with_capacity(source.len());

    for (idx, c) in source.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        compact.push(c);
        columns.extend(std::iter::repeat_n(idx + 1, c.len_utf8()));
    }

    (compact, columns)
}

/// Returns `true` when byte `start` of the whitespace-free text is the
/// start of the input or directly follows `(`.
///
/// Skipped characters still count, so the `-` in `#-3` does not start a
/// group.
fn starts_group(compact: &str, start: usize) -> bool {
    compact[..start].chars().next_back().is_none_or(|c| c == '(')
}

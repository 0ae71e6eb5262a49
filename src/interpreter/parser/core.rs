use std::iter::Peekable;

use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{LexerOptions, Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses an expression with the default (permissive) lexer options.
///
/// # Example
/// ```
/// use complexa::interpreter::parser::core::parse;
///
/// assert_eq!(parse("1 + 2 * x").unwrap().to_string(), "(+ 1 (* 2 x))");
/// assert!(parse("(1+2").is_err());
/// ```
///
/// # Errors
/// Returns a [`ParseError`] when the text is not a single well-formed
/// expression.
pub fn parse(source: &str) -> ParseResult<Expr> {
    parse_with(source, &LexerOptions::default())
}

/// Tokenizes and parses `source` into an expression tree.
///
/// The whole token stream must form one expression; leftover tokens fail with
/// [`ParseError::UnexpectedTrailingTokens`].
///
/// # Parameters
/// - `source`: The expression text.
/// - `options`: Tokenizer settings.
///
/// # Returns
/// The root of the parsed tree.
///
/// # Errors
/// Returns a [`ParseError`] for empty or incomplete input, unbalanced
/// parentheses, a malformed `conj(...)`, an unexpected or trailing token, or
/// (in strict mode) an unrecognized character.
pub fn parse_with(source: &str, options: &LexerOptions) -> ParseResult<Expr> {
    let tokens = tokenize(source, options)?;
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter)?;

    if let Some((token, column)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                          column: *column, });
    }

    trace!("tree: {expr}");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point of the recursive descent; it starts at the lowest
/// precedence level, addition and subtraction.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens)
}

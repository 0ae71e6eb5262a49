use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some((token, column)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let column = *column;
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                column };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// `*` and `/` fold to the left with a single factor on the right. `**` is
/// folded in the same loop, but its right operand is a whole exponent chain
/// (see [`parse_exponent`]). So `2**3**2` is `2**(3**2)`, while `2*3**2` is
/// `(2*3)**2`.
///
/// The rule is:
/// `multiplicative := factor (("*" | "/") factor | "**" exponent)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_factor(tokens)?;
    while let Some((token, column)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Pow)
    {
        let column = *column;
        tokens.next();
        let right = if op == BinaryOperator::Pow {
            parse_exponent(tokens)?
        } else {
            parse_factor(tokens)?
        };
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                column };
    }
    Ok(left)
}

/// Parses the right operand of `**`.
///
/// Handles repeated exponentiation with right-associativity:
/// `a ** b ** c` parses as `a ** (b ** c)`.
///
/// The rule is: `exponent := factor ("**" exponent)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned after a `**`.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_factor(tokens)?;

    if let Some((Token::DoubleStar, column)) = tokens.peek() {
        let column = *column;
        tokens.next();
        let exponent = parse_exponent(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   column });
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token is `+`, `-`, `*`, `/` or `**`,
/// otherwise `None`.
///
/// # Example
/// ```
/// use complexa::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleStar),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}

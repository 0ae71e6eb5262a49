use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_expression},
        },
        value::complex::{ComplexNumber, I as IMAGINARY_UNIT},
    },
};

/// Parses a factor, the highest-precedence form of the grammar.
///
/// Grammar:
/// ```text
///     factor := "(" expression ")" ("**" exponent)?
///             | "√" factor
///             | "conj" "(" expression ")"
///             | NUMBER "i"?
///             | "i"
///             | IDENTIFIER
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed [`Expr`].
///
/// # Errors
/// - `UnexpectedEndOfInput` if the tokens run out.
/// - `UnexpectedToken` if no alternative matches, including numbers that do
///   not convert to `f64`.
/// - Errors from [`parse_grouping`] and [`parse_conj`].
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked: &'a (Token, usize) = *tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Radical, _) => parse_radical(tokens),
        (Token::Conj, _) => parse_conj(tokens),
        (Token::Number(_), _) => parse_number(tokens),
        (Token::Identifier(_), _) => parse_identifier(tokens),
        (tok, column) => Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                           column: *column, }),
    }
}

/// Parses a parenthesized expression, with an optional `**` exponent
/// directly after the closing parenthesis.
///
/// Grammar: `grouping := "(" expression ")" ("**" exponent)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression, or an `Expr::BinaryOp` raising it to the exponent.
///
/// # Errors
/// `ExpectedClosingParen` (carrying the column of the `(`) if the group is
/// never closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let open_column = tokens.next().map_or(0, |(_, column)| *column);

    let inner = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        _ => return Err(ParseError::ExpectedClosingParen { column: open_column }),
    }

    if let Some((Token::DoubleStar, column)) = tokens.peek() {
        let column = *column;
        tokens.next();
        let exponent = parse_exponent(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(inner),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   column });
    }

    Ok(inner)
}

/// Parses a square root: `"√" factor`.
fn parse_radical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let column = tokens.next().map_or(0, |(_, column)| *column);
    let operand = parse_factor(tokens)?;

    Ok(Expr::UnaryOp { op: UnaryOperator::Sqrt,
                       expr: Box::new(operand),
                       column })
}

/// Parses a conjugate call: `"conj" "(" expression ")"`.
///
/// # Errors
/// - `ExpectedConjParen` if `conj` is not immediately followed by `(`.
/// - `UnclosedConj` if the argument is not followed by `)`.
fn parse_conj<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let column = tokens.next().map_or(0, |(_, column)| *column);

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        _ => return Err(ParseError::ExpectedConjParen { column }),
    }

    let argument = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        _ => return Err(ParseError::UnclosedConj { column }),
    }

    Ok(Expr::UnaryOp { op: UnaryOperator::Conj,
                       expr: Box::new(argument),
                       column })
}

/// Parses a number, which becomes a pure imaginary literal when an `i`
/// follows it directly (`2i`, `0.5i`).
///
/// # Errors
/// `UnexpectedToken` if the lexeme is not a valid `f64`, such as `1.2.3`.
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((Token::Number(lexeme), column)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let column = *column;

    let coefficient: f64 =
        lexeme.parse()
              .map_err(|_| ParseError::UnexpectedToken { token: lexeme.clone(),
                                                         column })?;

    let value = if let Some((Token::Identifier('i'), _)) = tokens.peek() {
        tokens.next();
        ComplexNumber::new(0.0, coefficient)
    } else {
        ComplexNumber::from(coefficient)
    };

    Ok(Expr::Literal { value, column })
}

/// Parses a single-letter identifier: the imaginary unit for `i`, a free
/// variable otherwise.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier('i'), column)) => Ok(Expr::Literal { value:  IMAGINARY_UNIT,
                                                                     column: *column, }),
        Some((Token::Identifier(name), column)) => Ok(Expr::Variable { name:   *name,
                                                                       column: *column, }),
        Some((tok, column)) => Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                                 column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

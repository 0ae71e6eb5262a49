/// Binary expression parsing.
///
/// Parses the additive and multiplicative levels, including the
/// right-associative exponent chains folded into the multiplicative loop.
pub mod binary;
/// Parser entry points.
///
/// Tokenizes the input, parses one complete expression and rejects trailing
/// tokens.
pub mod core;
/// Factor parsing.
///
/// Parses the highest-precedence forms: numbers, imaginary literals,
/// variables, parenthesized groups, `√` and `conj(...)`.
pub mod unary;

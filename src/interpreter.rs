/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the AST, resolves free variables through an injected
/// resolver, and applies the complex operators and functions.
///
/// # Responsibilities
/// - Evaluates AST nodes left to right.
/// - Caches resolved variables per expression.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer strips whitespace, splits the text into numbers, single-letter
/// identifiers, the `conj` keyword, operators and parentheses, and inserts
/// the implicit `0` before leading signs.
///
/// # Responsibilities
/// - Converts the input characters into tokens with their source columns.
/// - Skips (or, in strict mode, rejects) characters that form no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser that encodes precedence and associativity in
/// the shape of the tree.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Reports syntax errors with the offending token and column.
pub mod parser;
/// The value module defines the runtime number type.
pub mod value;

//! # complexa
//!
//! complexa parses and evaluates short arithmetic expressions over complex
//! numbers, such as `(1+2i)*(3-4i)`. It supports `+ - * / **`, the principal
//! square root `√`, the conjugate `conj(...)`, and single-letter variables
//! whose values are supplied on demand by a resolver.
//!
//! ```
//! use complexa::{get_result, interpreter::evaluator::resolver::from_fn};
//! use complexa::interpreter::value::complex::ComplexNumber;
//!
//! let mut resolver = from_fn(|_| Ok(ComplexNumber::new(2.0, 0.0)));
//! assert_eq!(get_result("2**3**x", &mut resolver).unwrap(),
//!            ComplexNumber::new(512.0, 0.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::{core::Calculator, resolver::VariableResolver},
        value::complex::ComplexNumber,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an expression as a tree. The tree is built by the parser and walked by the
/// evaluator; its `Display` form is the diagnostic `(op left right)` notation.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Attaches source columns and offending text for user feedback.
/// - Integrates with the standard error traits.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and the complex
/// value type, and exposes the public API used by the command-line shell.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses and evaluates `source`, resolving variables through `resolver`.
///
/// Uses the default (permissive) lexer options and a fresh environment.
///
/// # Errors
/// Returns [`Error::Parse`] if the text is not a valid expression and
/// [`Error::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use complexa::{error::Error, get_result, interpreter::value::complex::ComplexNumber};
///
/// let mut no_variables: HashMap<char, ComplexNumber> = HashMap::new();
/// assert!(get_result("conj(3+4i)", &mut no_variables).is_ok());
/// assert!(matches!(get_result("1/0", &mut no_variables), Err(Error::Runtime(_))));
/// assert!(matches!(get_result("(1+2", &mut no_variables), Err(Error::Parse(_))));
/// ```
pub fn get_result<R: VariableResolver>(source: &str,
                                       resolver: &mut R)
                                       -> Result<ComplexNumber, Error> {
    let mut calculator = Calculator::new(source)?;
    Ok(calculator.evaluate(resolver)?)
}

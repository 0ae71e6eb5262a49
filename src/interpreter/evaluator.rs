/// Binary operator evaluation.
///
/// Implements complex addition, subtraction, multiplication, division and
/// exponentiation, including the division-by-zero checks.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context with its variable environment, the
/// [`core::Calculator`] that pairs a tree with a context, and the approximate
/// comparison of two results.
pub mod core;

/// Variable resolvers.
///
/// Defines the [`resolver::VariableResolver`] capability used to supply values
/// for free variables, plus the interactive, closure and map implementations.
pub mod resolver;

/// Unary function evaluation.
///
/// Implements the principal square root and the complex conjugate.
pub mod unary;

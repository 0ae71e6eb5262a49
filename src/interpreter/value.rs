/// The complex number type every expression evaluates to.
///
/// Defines [`complex::ComplexNumber`] with its arithmetic, principal square
/// root, logarithm and power, plus its text formatting and parsing.
pub mod complex;

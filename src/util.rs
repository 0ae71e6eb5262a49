/// Numeric conversion helpers.
///
/// Holds the checked conversions used when an `f64` has to become an integer,
/// such as picking exact repeated multiplication for integral exponents.
pub mod num;

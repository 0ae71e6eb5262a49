/// Largest exponent magnitude handled by repeated squaring.
///
/// Beyond this, `exp(w * ln(z))` is used instead.
pub const MAX_INTEGRAL_EXPONENT: f64 = 100.0;

/// Converts an `f64` exponent to `i32` if it is integral and small enough to
/// be applied by repeated multiplication.
///
/// ## Parameters
/// - `value`: The exponent to convert.
///
/// ## Returns
/// - `Some(i32)`: The exponent, if it has no fractional part and its magnitude
///   does not exceed [`MAX_INTEGRAL_EXPONENT`].
/// - `None`: Otherwise, including for `NaN` and infinities.
///
/// ## Example
/// ```
/// use complexa::util::num::integral_exponent;
///
/// assert_eq!(integral_exponent(3.0), Some(3));
/// assert_eq!(integral_exponent(-2.0), Some(-2));
/// assert_eq!(integral_exponent(0.5), None);
/// assert_eq!(integral_exponent(1e6), None);
/// assert_eq!(integral_exponent(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn integral_exponent(value: f64) -> Option<i32> {
    if value.fract() != 0.0 || value.abs() > MAX_INTEGRAL_EXPONENT {
        return None;
    }

    Some(value as i32)
}

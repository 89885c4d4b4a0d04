/// Raises a signed 64-bit integer to an integer power, wrapping on
/// overflow.
///
/// Negative exponents follow truncating integer semantics: the true result
/// lies strictly between -1 and 1 whenever `|base| > 1`, so it truncates
/// to `0`; bases `1` and `-1` keep their usual parity behavior. Raising
/// `0` to a negative power is a division by zero and yields `None`.
///
/// Exponents above `u32::MAX` are clamped; any base other than `0`, `1`
/// and `-1` has long since wrapped to a repeating cycle at that
/// magnitude, and those three bases are handled before the clamp.
///
/// # Parameters
/// - `base`: The base of the exponentiation.
/// - `exponent`: The power to raise `base` to.
///
/// # Returns
/// - `Some(i64)`: The wrapped result.
/// - `None`: If `base` is `0` and `exponent` is negative.
///
/// # Example
/// ```
/// use lisma::util::num::wrapping_pow_i64;
///
/// assert_eq!(wrapping_pow_i64(2, 10), Some(1024));
/// assert_eq!(wrapping_pow_i64(2, -1), Some(0));
/// assert_eq!(wrapping_pow_i64(-1, 3), Some(-1));
/// assert_eq!(wrapping_pow_i64(0, -1), None);
/// ```
#[must_use]
pub fn wrapping_pow_i64(base: i64, exponent: i64) -> Option<i64> {
    match base {
        0 if exponent < 0 => None,
        0 if exponent == 0 => Some(1),
        0 => Some(0),
        1 => Some(1),
        -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
        _ if exponent < 0 => Some(0),
        _ => {
            let exponent = u32::try_from(exponent).unwrap_or(u32::MAX);
            Some(base.wrapping_pow(exponent))
        },
    }
}

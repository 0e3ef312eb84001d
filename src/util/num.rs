/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// `2^63` as an `f64`; the magnitude of `i64::MIN`.
pub const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use radixa::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Applies a sign to an unsigned magnitude, returning `None` when the result
/// does not fit into an `i64`.
///
/// The asymmetric range is honoured: a magnitude of `2^63` is accepted when
/// negative and yields `i64::MIN`.
///
/// ## Example
/// ```
/// use radixa::util::num::signed_from_magnitude;
///
/// assert_eq!(signed_from_magnitude(42, true), Some(-42));
/// assert_eq!(signed_from_magnitude(1 << 63, true), Some(i64::MIN));
/// assert_eq!(signed_from_magnitude(1 << 63, false), None);
/// ```
pub fn signed_from_magnitude(magnitude: u64, negative: bool) -> Option<i64> {
    if negative {
        0_i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

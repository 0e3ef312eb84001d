//! Truncation and rounding built from subtraction and comparison only.
//!
//! None of these functions call `f64::trunc`, `f64::round` or any other
//! rounding primitive. Integers pass through unchanged; reals are reduced to
//! their integer part by repeated exact subtraction.

use crate::{
    error::{NumericError, NumericResult},
    util::num::{TWO_POW_63, signed_from_magnitude},
    value::Value,
};

/// Truncates a number toward zero.
///
/// # Errors
/// - `NotANumber` for booleans and text.
/// - `NonFinite` for NaN and infinities.
/// - `OutOfRange` if the integer part does not fit into an `i64`.
///
/// # Example
/// ```
/// use radixa::{rounding::truncate, value::Value};
///
/// assert_eq!(truncate(&Value::Real(3.7)).unwrap(), 3);
/// assert_eq!(truncate(&Value::Real(-3.7)).unwrap(), -3);
/// assert_eq!(truncate(&Value::Integer(-8)).unwrap(), -8);
/// assert!(truncate(&Value::from("abc")).is_err());
/// ```
pub fn truncate(value: &Value) -> NumericResult<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        Value::Real(r) => {
            let (negative, magnitude) = split_sign(*r)?;
            apply_sign(integer_part(magnitude)?, negative, *r)
        },
        other => Err(not_a_number(other)),
    }
}

/// Rounds a number to the nearest integer, ties to even.
///
/// This is the result of formatting the value with zero decimal places. The
/// fractional part is taken exactly from the truncation, so values just off a
/// tie are never pulled onto it.
///
/// # Errors
/// Same as [`truncate`].
///
/// # Example
/// ```
/// use radixa::{rounding::round, value::Value};
///
/// assert_eq!(round(&Value::Real(2.5)).unwrap(), 2);
/// assert_eq!(round(&Value::Real(3.5)).unwrap(), 4);
/// assert_eq!(round(&Value::Real(-2.6)).unwrap(), -3);
/// ```
pub fn round(value: &Value) -> NumericResult<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        Value::Real(r) => {
            let (negative, magnitude) = split_sign(*r)?;
            let whole = integer_part(magnitude)?;
            let fraction = magnitude - as_f64(whole);

            let rounded = if fraction > 0.5 || (fraction == 0.5 && whole % 2 == 1) {
                whole.checked_add(1).ok_or_else(|| too_large(*r))?
            } else {
                whole
            };
            apply_sign(rounded, negative, *r)
        },
        other => Err(not_a_number(other)),
    }
}

/// Rounds a number to the nearest integer, ties away from zero.
///
/// Computed as `sign * truncate(|x| + 0.5)`.
///
/// # Errors
/// Same as [`truncate`].
///
/// # Example
/// ```
/// use radixa::{rounding::round_away_from_zero, value::Value};
///
/// assert_eq!(round_away_from_zero(&Value::Real(2.5)).unwrap(), 3);
/// assert_eq!(round_away_from_zero(&Value::Real(-2.5)).unwrap(), -3);
/// assert_eq!(round_away_from_zero(&Value::Real(2.4)).unwrap(), 2);
/// ```
pub fn round_away_from_zero(value: &Value) -> NumericResult<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        Value::Real(r) => {
            let (negative, magnitude) = split_sign(*r)?;
            apply_sign(integer_part(magnitude + 0.5)?, negative, *r)
        },
        other => Err(not_a_number(other)),
    }
}

/// Counts the whole units in a finite, non-negative `magnitude`.
///
/// Magnitudes up to `2^63` are accepted so that `i64::MIN` can still be
/// produced once the sign is applied.
///
/// Each step subtracts the largest power of two not exceeding the remainder.
/// Since that power is at least half the remainder, every subtraction is
/// exact, and the loop runs at most once per bit of the integer part.
fn integer_part(magnitude: f64) -> NumericResult<u64> {
    if magnitude > TWO_POW_63 {
        return Err(too_large(magnitude));
    }

    let mut remainder = magnitude;
    let mut units: u64 = 0;

    while remainder >= 1.0 {
        let mut step = 1.0;
        let mut step_units: u64 = 1;
        while step + step <= remainder {
            step += step;
            step_units += step_units;
        }
        remainder -= step;
        units += step_units;
    }

    Ok(units)
}

fn split_sign(value: f64) -> NumericResult<(bool, f64)> {
    if !value.is_finite() {
        return Err(NumericError::NonFinite { value });
    }
    if value < 0.0 { Ok((true, -value)) } else { Ok((false, value)) }
}

fn apply_sign(magnitude: u64, negative: bool, original: f64) -> NumericResult<i64> {
    signed_from_magnitude(magnitude, negative).ok_or_else(|| too_large(original))
}

// Only called on integer parts of finite f64s of at most 2^63, which are exact.
#[allow(clippy::cast_precision_loss)]
fn as_f64(units: u64) -> f64 {
    units as f64
}

fn not_a_number(value: &Value) -> NumericError {
    NumericError::NotANumber { found: value.type_name() }
}

fn too_large(value: f64) -> NumericError {
    NumericError::OutOfRange { details: format!("{value} does not fit into a 64-bit integer") }
}

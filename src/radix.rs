use crate::error::NumericResult;

/// Validated digit alphabets and base range checks.
pub mod digit_map;
/// The configurable base encoder.
pub mod encoder;

pub use digit_map::{DigitMap, MAX_BASE, MIN_BASE, STANDARD_DIGITS};
pub use encoder::BaseEncoder;

/// Encodes a decimal integer in `base` using `digit_map`.
///
/// # Errors
/// - `BaseOutOfRange` if `base` is outside `[2, 36]`.
/// - `DigitMapLength` if `digit_map` does not have exactly `base` characters.
/// - `DuplicateDigit` if `digit_map` repeats a character.
///
/// # Example
/// ```
/// use radixa::radix::convert;
///
/// assert_eq!(convert(255, 16, "0123456789ABCDEF").unwrap(), "FF");
/// assert_eq!(convert(-5, 2, "01").unwrap(), "-101");
/// assert_eq!(convert(0, 2, "01").unwrap(), "0");
/// assert!(convert(10, 1, "0").is_err());
/// ```
pub fn convert(number: i64, base: i64, digit_map: &str) -> NumericResult<String> {
    let encoder = BaseEncoder::new(10, base, digit_map)?;
    Ok(encoder.encode_integer(number))
}

/// Interprets `numeral` in `base`.
///
/// Uses the standard alphabet unless `digit_map` is given.
///
/// # Errors
/// Base and digit map errors as for [`convert`], plus anything
/// [`BaseEncoder::decode_to_decimal`] reports.
///
/// # Example
/// ```
/// use radixa::radix::decode;
///
/// assert_eq!(decode("FF", 16, None).unwrap(), 255);
/// assert_eq!(decode("-zz", 36, Some("0123456789abcdefghijklmnopqrstuvwxyz")).unwrap(),
///            -1295);
/// ```
pub fn decode(numeral: &str, base: i64, digit_map: Option<&str>) -> NumericResult<i64> {
    let encoder = BaseEncoder::with_source_digits(base, 10, "0123456789", digit_map)?;
    encoder.decode_to_decimal(numeral)
}

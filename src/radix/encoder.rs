use crate::{
    error::{BaseRole, NumericError, NumericResult},
    radix::digit_map::{DigitMap, validate_base},
    util::num::signed_from_magnitude,
    value::Value,
};

/// Converts integers from one base to another.
///
/// Every field is validated when the encoder is built and cannot change
/// afterwards. Numerals in the source base are read with the source digit
/// map; output is rendered with the target digit map.
///
/// # Example
/// ```
/// use radixa::radix::BaseEncoder;
///
/// let encoder = BaseEncoder::new(2, 16, "0123456789abcdef").unwrap();
/// assert_eq!(encoder.encode_numeral("11111111").unwrap(), "ff");
/// assert_eq!(encoder.encode_numeral("-1010").unwrap(), "-a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseEncoder {
    source_base:      u32,
    to_base:          u32,
    digit_map:        DigitMap,
    source_digit_map: DigitMap,
}

impl Default for BaseEncoder {
    /// Decimal to hexadecimal with upper case digits.
    fn default() -> Self {
        Self { source_base:      10,
               to_base:          16,
               digit_map:        DigitMap::standard(16),
               source_digit_map: DigitMap::standard(10), }
    }
}

impl BaseEncoder {
    /// Builds an encoder that reads numerals with the standard alphabet.
    ///
    /// # Errors
    /// Same as [`BaseEncoder::with_source_digits`].
    ///
    /// # Example
    /// ```
    /// use radixa::{error::ErrorKind, radix::BaseEncoder};
    ///
    /// let err = BaseEncoder::new(10, 16, "0123456789ABCDE").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// assert!(err.to_string().contains("Expected 16 but got 15"));
    /// ```
    pub fn new(source_base: i64, to_base: i64, digit_map: &str) -> NumericResult<Self> {
        Self::with_source_digits(source_base, to_base, digit_map, None)
    }

    /// Builds an encoder with an optional custom source alphabet.
    ///
    /// When `source_digit_map` is `None` (or empty) the first `source_base`
    /// characters of the standard alphabet are used.
    ///
    /// Validation order: source base, target base, target digit map, source
    /// digit map. The first failure is reported.
    ///
    /// # Errors
    /// - `BaseOutOfRange` if either base is outside `[2, 36]`.
    /// - `DigitMapLength` if a digit map does not match its base.
    /// - `DuplicateDigit` if a digit map repeats a symbol.
    pub fn with_source_digits(source_base: i64,
                              to_base: i64,
                              digit_map: &str,
                              source_digit_map: Option<&str>)
                              -> NumericResult<Self> {
        let source_base = validate_base(source_base, BaseRole::Source)?;
        let to_base = validate_base(to_base, BaseRole::Target)?;
        let digit_map = DigitMap::new(digit_map, to_base, BaseRole::Target)?;
        let source_digit_map = match source_digit_map {
            Some(symbols) if !symbols.is_empty() => {
                DigitMap::new(symbols, source_base, BaseRole::Source)?
            },
            _ => DigitMap::standard(source_base),
        };

        Ok(Self { source_base,
                  to_base,
                  digit_map,
                  source_digit_map })
    }

    /// The base numerals are read in.
    #[must_use]
    pub const fn source_base(&self) -> u32 {
        self.source_base
    }

    /// The base output is rendered in.
    #[must_use]
    pub const fn to_base(&self) -> u32 {
        self.to_base
    }

    /// The alphabet output is rendered with.
    #[must_use]
    pub const fn digit_map(&self) -> &DigitMap {
        &self.digit_map
    }

    /// The alphabet numerals are read with.
    #[must_use]
    pub const fn source_digit_map(&self) -> &DigitMap {
        &self.source_digit_map
    }

    /// Interprets `numeral` in the source base.
    ///
    /// Digits are consumed most significant first. A single leading `-`
    /// negates the result, unless `-` is itself a symbol of the source digit
    /// map, in which case it is read as a digit.
    ///
    /// # Errors
    /// - `EmptyNumeral` if there are no digits.
    /// - `UnknownDigit` for a symbol missing from the source digit map.
    /// - `OutOfRange` if the value does not fit into an `i64`.
    ///
    /// # Example
    /// ```
    /// use radixa::{error::NumericError, radix::BaseEncoder};
    ///
    /// let encoder = BaseEncoder::new(16, 10, "0123456789").unwrap();
    /// assert_eq!(encoder.decode_to_decimal("FF").unwrap(), 255);
    /// assert_eq!(encoder.decode_to_decimal("-10").unwrap(), -16);
    ///
    /// let err = encoder.decode_to_decimal("ff").unwrap_err();
    /// assert_eq!(err, NumericError::UnknownDigit { digit: 'f', base: 16 });
    /// ```
    pub fn decode_to_decimal(&self, numeral: &str) -> NumericResult<i64> {
        let (negative, digits) = match numeral.strip_prefix('-') {
            Some(rest) if self.source_digit_map.value_of('-').is_none() => (true, rest),
            _ => (false, numeral),
        };

        if digits.is_empty() {
            return Err(NumericError::EmptyNumeral);
        }

        let mut magnitude: u64 = 0;
        for symbol in digits.chars() {
            let value = self.source_digit_map
                            .value_of(symbol)
                            .ok_or(NumericError::UnknownDigit { digit: symbol,
                                                                base:  self.source_base, })?;
            magnitude = magnitude.checked_mul(u64::from(self.source_base))
                                 .and_then(|m| m.checked_add(u64::from(value)))
                                 .ok_or_else(|| out_of_range(numeral))?;
        }

        signed_from_magnitude(magnitude, negative).ok_or_else(|| out_of_range(numeral))
    }

    /// Renders an integer in the target base.
    ///
    /// Zero renders as the digit mapped to value 0. Negative numbers get a
    /// leading `-` in front of the rendering of their magnitude.
    ///
    /// # Example
    /// ```
    /// use radixa::radix::BaseEncoder;
    ///
    /// let encoder = BaseEncoder::new(10, 2, "01").unwrap();
    /// assert_eq!(encoder.encode_integer(10), "1010");
    /// assert_eq!(encoder.encode_integer(-10), "-1010");
    /// assert_eq!(encoder.encode_integer(0), "0");
    /// ```
    #[must_use]
    pub fn encode_integer(&self, number: i64) -> String {
        let base = u64::from(self.to_base);
        let mut magnitude = number.unsigned_abs();
        let mut digits = Vec::new();

        loop {
            // The remainder is below `to_base`, which fits in a u32.
            #[allow(clippy::cast_possible_truncation)]
            let remainder = (magnitude % base) as u32;
            digits.push(self.digit_map.digit(remainder));
            magnitude /= base;
            if magnitude == 0 {
                break;
            }
        }

        if number < 0 {
            digits.push('-');
        }

        digits.iter().rev().collect()
    }

    /// Reads `numeral` in the source base and renders it in the target base.
    ///
    /// # Errors
    /// See [`BaseEncoder::decode_to_decimal`].
    pub fn encode_numeral(&self, numeral: &str) -> NumericResult<String> {
        Ok(self.encode_integer(self.decode_to_decimal(numeral)?))
    }

    /// Encodes a dynamically typed number.
    ///
    /// Text is always read as a numeral in the source base. An integer is
    /// only accepted when the source base is 10, since it carries no digits
    /// of its own.
    ///
    /// # Errors
    /// - `UnexpectedInput` for an integer with a non-decimal source base, or
    ///   for reals and booleans.
    /// - Anything [`BaseEncoder::decode_to_decimal`] reports.
    ///
    /// # Example
    /// ```
    /// use radixa::{error::ErrorKind, radix::BaseEncoder, value::Value};
    ///
    /// let encoder = BaseEncoder::default();
    /// assert_eq!(encoder.encode(&Value::Integer(255)).unwrap(), "FF");
    /// assert_eq!(encoder.encode(&Value::from("255")).unwrap(), "FF");
    ///
    /// let err = encoder.encode(&Value::Real(2.5)).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TypeError);
    /// ```
    pub fn encode(&self, number: &Value) -> NumericResult<String> {
        match number {
            Value::Text(numeral) => self.encode_numeral(numeral),
            Value::Integer(n) if self.source_base == 10 => Ok(self.encode_integer(*n)),
            other => {
                let expected = if self.source_base == 10 {
                    "an integer or a numeral".to_string()
                } else {
                    format!("a numeral in base {}", self.source_base)
                };
                Err(NumericError::UnexpectedInput { expected,
                                                    found: other.type_name() })
            },
        }
    }
}

impl std::fmt::Display for BaseEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Base encoder from base {} to base {}. Digits of the new base are: {}",
               self.source_base, self.to_base, self.digit_map)
    }
}

fn out_of_range(numeral: &str) -> NumericError {
    NumericError::OutOfRange { details: format!("numeral '{numeral}' does not fit into 64 bits") }
}

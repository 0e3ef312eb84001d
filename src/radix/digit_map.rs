use std::collections::HashMap;

use crate::error::{BaseRole, NumericError, NumericResult};

/// The default alphabet; the digits of base `n` are its first `n` characters.
pub const STANDARD_DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Smallest supported base.
pub const MIN_BASE: i64 = 2;
/// Largest supported base.
pub const MAX_BASE: i64 = 36;

/// Checks that a base lies in `[MIN_BASE, MAX_BASE]`.
///
/// # Example
/// ```
/// use radixa::{
///     error::{BaseRole, NumericError},
///     radix::digit_map::validate_base,
/// };
///
/// assert_eq!(validate_base(16, BaseRole::Target).unwrap(), 16);
///
/// let err = validate_base(37, BaseRole::Source).unwrap_err();
/// assert_eq!(err,
///            NumericError::BaseOutOfRange { role: BaseRole::Source,
///                                           base: 37, });
/// ```
pub fn validate_base(base: i64, role: BaseRole) -> NumericResult<u32> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(NumericError::BaseOutOfRange { role, base });
    }
    u32::try_from(base).map_err(|_| NumericError::BaseOutOfRange { role, base })
}

/// An ordered alphabet of unique symbols, one per digit value.
///
/// The symbol at position `i` renders digit value `i`. A reverse index is
/// kept so numerals can be interpreted without scanning the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitMap {
    digits:    Vec<char>,
    positions: HashMap<char, u32>,
}

impl DigitMap {
    /// Builds a digit map for `base` from `symbols`.
    ///
    /// The length check runs before the uniqueness check, so a map that is
    /// both short and repetitive reports its length.
    ///
    /// # Errors
    /// - `DigitMapLength` if `symbols` does not contain exactly `base`
    ///   characters.
    /// - `DuplicateDigit` naming the first repeated character.
    ///
    /// # Example
    /// ```
    /// use radixa::{
    ///     error::{BaseRole, NumericError},
    ///     radix::digit_map::DigitMap,
    /// };
    ///
    /// let map = DigitMap::new("01", 2, BaseRole::Target).unwrap();
    /// assert_eq!(map.digit(1), '1');
    ///
    /// let err = DigitMap::new("0120", 4, BaseRole::Target).unwrap_err();
    /// assert!(matches!(err, NumericError::DuplicateDigit { digit: '0', .. }));
    /// ```
    pub fn new(symbols: &str, base: u32, role: BaseRole) -> NumericResult<Self> {
        let digits = symbols.chars().collect::<Vec<_>>();

        if digits.len() != base as usize {
            return Err(NumericError::DigitMapLength { role,
                                                      expected: base,
                                                      found: digits.len() });
        }

        let mut positions = HashMap::with_capacity(digits.len());
        for (value, &digit) in (0_u32..).zip(&digits) {
            if positions.insert(digit, value).is_some() {
                return Err(NumericError::DuplicateDigit { role, digit });
            }
        }

        Ok(Self { digits, positions })
    }

    /// The first `base` characters of [`STANDARD_DIGITS`].
    ///
    /// `base` is expected to be validated already; larger values are capped
    /// at the length of the standard alphabet.
    #[must_use]
    pub fn standard(base: u32) -> Self {
        let digits = STANDARD_DIGITS.chars().take(base as usize).collect::<Vec<_>>();
        let positions = (0_u32..).zip(digits.iter().copied())
                                 .map(|(value, digit)| (digit, value))
                                 .collect();

        Self { digits, positions }
    }

    /// Returns the symbol rendering digit `value`.
    ///
    /// # Panics
    /// Panics if `value` is not smaller than [`DigitMap::len`]; the encoder
    /// only asks for remainders of division by the map's own base.
    #[must_use]
    pub fn digit(&self, value: u32) -> char {
        self.digits[value as usize]
    }

    /// Returns the digit value of `symbol`, if it belongs to the map.
    #[must_use]
    pub fn value_of(&self, symbol: char) -> Option<u32> {
        self.positions.get(&symbol).copied()
    }

    /// Number of symbols in the map, which is also its base.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` if the map has no symbols. Validated maps never are.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl std::fmt::Display for DigitMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Which side of a conversion a base or digit map belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseRole {
    /// The base the input numeral is written in.
    Source,
    /// The base the output is rendered in.
    Target,
}

impl std::fmt::Display for BaseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Coarse classification of a [`NumericError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value of the right type was rejected (bad base, malformed digit map,
    /// unknown digit, out of range).
    InvalidArgument,
    /// A value of the wrong type was supplied.
    TypeError,
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors raised by the conversion and rounding helpers.
pub enum NumericError {
    /// A base outside the supported range.
    BaseOutOfRange {
        /// Whether the source or target base was rejected.
        role: BaseRole,
        /// The offending base.
        base: i64,
    },
    /// A digit map whose length differs from its base.
    DigitMapLength {
        /// Whether the source or target digit map was rejected.
        role:     BaseRole,
        /// The base the map has to cover.
        expected: u32,
        /// The number of symbols actually supplied.
        found:    usize,
    },
    /// A digit map that lists the same symbol twice.
    DuplicateDigit {
        /// Whether the source or target digit map was rejected.
        role:  BaseRole,
        /// The repeated symbol.
        digit: char,
    },
    /// A numeral contained a symbol missing from the source digit map.
    UnknownDigit {
        /// The symbol that could not be interpreted.
        digit: char,
        /// The source base.
        base:  u32,
    },
    /// A numeral without any digits.
    EmptyNumeral,
    /// A result does not fit into a 64-bit signed integer.
    OutOfRange {
        /// What overflowed.
        details: String,
    },
    /// NaN or an infinity where a finite number was required.
    NonFinite {
        /// The rejected value.
        value: f64,
    },
    /// A non-numeric value was passed to a numeric helper.
    NotANumber {
        /// The type name of the rejected value.
        found: &'static str,
    },
    /// A value of the wrong shape was passed to the encoder.
    UnexpectedInput {
        /// What was expected instead.
        expected: String,
        /// The type name of the rejected value.
        found:    &'static str,
    },
}

impl NumericError {
    /// Returns the classification of this error.
    ///
    /// # Example
    /// ```
    /// use radixa::{
    ///     error::{ErrorKind, NumericError},
    ///     rounding::truncate,
    ///     value::Value,
    /// };
    ///
    /// let err = truncate(&Value::from("abc")).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TypeError);
    /// assert!(matches!(err, NumericError::NotANumber { found: "text" }));
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotANumber { .. } | Self::UnexpectedInput { .. } => ErrorKind::TypeError,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl std::fmt::Display for NumericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BaseOutOfRange { role, base } => write!(f,
                                                          "Invalid {role} base {base}. Must lie between 2 and 36."),
            Self::DigitMapLength { role,
                                   expected,
                                   found, } => write!(f,
                                                      "Digit map for the {role} base is of invalid length. Expected {expected} but got {found}."),
            Self::DuplicateDigit { role, digit } => write!(f,
                                                           "Digit map for the {role} base repeats the character '{digit}'. Every digit must be unique."),
            Self::UnknownDigit { digit, base } => {
                write!(f, "Character '{digit}' is not a digit of base {base}.")
            },
            Self::EmptyNumeral => write!(f, "Numeral contains no digits."),
            Self::OutOfRange { details } => write!(f, "Value out of range: {details}."),
            Self::NonFinite { value } => write!(f, "Expected a finite number, got {value}."),
            Self::NotANumber { found } => {
                write!(f, "Invalid type. Must be integer or real, got {found}.")
            },
            Self::UnexpectedInput { expected, found } => {
                write!(f, "Invalid type. Expected {expected}, got {found}.")
            },
        }
    }
}

impl std::error::Error for NumericError {}

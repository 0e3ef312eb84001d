/// Conversion and rounding errors.
///
/// Defines the errors raised by the library helpers themselves: invalid bases,
/// malformed digit maps, numerals that cannot be interpreted, values out of
/// range, and non-numeric input to the rounding functions.
pub mod numeric_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// script, such as unexpected tokens or a missing closing parenthesis.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a script,
/// including unknown functions, argument mismatches, failed assertions, and
/// wrapped [`NumericError`]s.
pub mod runtime_error;

pub use numeric_error::{BaseRole, ErrorKind, NumericError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type used by the library helpers.
pub type NumericResult<T> = Result<T, NumericError>;

/// Assertion and printing builtins.
///
/// `assert`, `assert_eq` and `print`; the glue that lets scripts check and
/// show their own results.
pub mod builtin;
/// Base conversion builtins.
///
/// `convert`, `encode` and `decode`, backed by the base encoder.
pub mod convert;
/// Approximate comparison builtins.
///
/// `approx_eq` with the fixed tolerances and `is_close` with explicit ones.
pub mod approx;
/// Truncation and rounding builtins.
///
/// `trunc`, `round` and `round_away`.
pub mod rounding;

pub mod core;

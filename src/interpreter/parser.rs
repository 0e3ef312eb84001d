/// Core parsing entry points.
///
/// Defines the `ParseResult` alias and parses statements and expressions:
/// literals, negation, and function calls.
pub mod core;
/// Parser helpers.
///
/// Shared routines such as comma separated argument lists and expecting a
/// specific token.
pub mod utils;

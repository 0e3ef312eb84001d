/// Core evaluation logic for expressions and values.
///
/// Contains the `EvalResult` alias and the recursive expression evaluator.
pub mod core;

/// Builtin functions callable from scripts.
///
/// Each builtin adapts one of the library helpers to script values and
/// reports failures with the line of the call.
pub mod function;

/// Utility functions for the evaluator.
pub mod utils;

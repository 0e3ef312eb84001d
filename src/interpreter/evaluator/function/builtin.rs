use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
    value::Value,
};

/// Asserts that a boolean condition is true.
///
/// Accepts exactly one boolean argument.
/// Returns the argument unchanged when the assertion succeeds.
///
/// # Example
/// ```
/// use radixa::{interpreter::evaluator::function::builtin::assert_fn, value::Value};
///
/// let r = assert_fn(&[Value::Bool(true)], 1).unwrap();
/// assert_eq!(r, Value::Bool(true));
///
/// assert!(assert_fn(&[Value::Bool(false)], 1).is_err());
/// assert!(assert_fn(&[Value::Integer(1)], 1).is_err());
/// ```
pub fn assert_fn(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("assert", args, 1, line)?;

    if !args[0].as_bool(line)? {
        return Err(RuntimeError::AssertionFailed { details: String::new(),
                                                   line });
    }
    Ok(args[0].clone())
}

/// Asserts that two values are identical.
///
/// Values of different types are never equal, so `assert_eq(3, 3.0)` fails.
/// Returns `true` when the assertion succeeds.
///
/// # Example
/// ```
/// use radixa::{interpreter::evaluator::function::builtin::assert_eq_fn, value::Value};
///
/// assert!(assert_eq_fn(&["FF".into(), "FF".into()], 1).is_ok());
/// assert!(assert_eq_fn(&[Value::Integer(3), Value::Real(3.0)], 1).is_err());
/// ```
pub fn assert_eq_fn(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("assert_eq", args, 2, line)?;

    if args[0] != args[1] {
        return Err(RuntimeError::AssertionFailed { details: format!("{} ({}) != {} ({})",
                                                                    args[0],
                                                                    args[0].type_name(),
                                                                    args[1],
                                                                    args[1].type_name()),
                                                   line });
    }
    Ok(Value::Bool(true))
}

/// Prints a value to standard output and returns it unchanged.
///
/// # Example
/// ```
/// use radixa::{interpreter::evaluator::function::builtin::print, value::Value};
///
/// // The function prints the value to stdout, but the doctest
/// // only checks the returned result.
/// let result = print(&[Value::Integer(42)], 1).unwrap();
///
/// assert_eq!(result, 42.into());
/// ```
pub fn print(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("print", args, 1, line)?;

    println!("{}", args[0]);
    Ok(args[0].clone())
}

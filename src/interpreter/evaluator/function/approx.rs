use crate::{
    approx::{approx_equal, approx_equal_with},
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
    value::Value,
};

/// Compares two numbers with the default tolerances.
///
/// Integers are converted to reals; integers too large to convert exactly
/// are rejected with `Overflow`.
///
/// # Example
/// ```
/// use radixa::{interpreter::evaluator::function::approx::approx_eq, value::Value};
///
/// let r = approx_eq(&[Value::Integer(1), Value::Real(1.000_000_1)], 1).unwrap();
/// assert_eq!(r, Value::Bool(true));
/// ```
pub fn approx_eq(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("approx_eq", args, 2, line)?;

    let a = args[0].as_real(line)?;
    let b = args[1].as_real(line)?;

    Ok(Value::Bool(approx_equal(a, b)))
}

/// Compares two numbers with explicit tolerances.
///
/// `is_close(a, b, rel_tolerance, abs_tolerance)`
pub fn is_close(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("is_close", args, 4, line)?;

    let a = args[0].as_real(line)?;
    let b = args[1].as_real(line)?;
    let rel_tolerance = args[2].as_real(line)?;
    let abs_tolerance = args[3].as_real(line)?;

    Ok(Value::Bool(approx_equal_with(a, b, rel_tolerance, abs_tolerance)))
}

use crate::{
    error::{NumericResult, RuntimeError},
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
    rounding,
    value::Value,
};

/// Truncates a numeric value toward zero.
///
/// Accepts exactly one argument.
/// - Integers are returned unchanged.
/// - Reals lose their fractional part.
///
/// Non numeric values cause a `Numeric` error of kind `TypeError`.
///
/// # Example
/// ```
/// use radixa::{interpreter::evaluator::function::rounding::trunc, value::Value};
///
/// let r = trunc(&[Value::Real(3.7)], 1).unwrap();
/// assert_eq!(r, 3.into());
///
/// let r = trunc(&[Value::Integer(-5)], 1).unwrap();
/// assert_eq!(r, (-5).into());
/// ```
pub fn trunc(args: &[Value], line: usize) -> EvalResult<Value> {
    apply("trunc", rounding::truncate, args, line)
}

/// Rounds to the nearest integer, ties to even.
pub fn round(args: &[Value], line: usize) -> EvalResult<Value> {
    apply("round", rounding::round, args, line)
}

/// Rounds to the nearest integer, ties away from zero.
pub fn round_away(args: &[Value], line: usize) -> EvalResult<Value> {
    apply("round_away", rounding::round_away_from_zero, args, line)
}

fn apply(name: &str,
         op: fn(&Value) -> NumericResult<i64>,
         args: &[Value],
         line: usize)
         -> EvalResult<Value> {
    check_arity(name, args, 1, line)?;

    op(&args[0]).map(Value::Integer)
                .map_err(RuntimeError::numeric(line))
}

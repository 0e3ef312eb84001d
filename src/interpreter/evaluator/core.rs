use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::function::core::eval_function,
    value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression and returns the resulting value.
///
/// Arguments of a call are evaluated left to right before the builtin is
/// looked up, so the first failing argument is the one reported.
///
/// # Example
/// ```
/// use radixa::{ast::Expr, interpreter::evaluator::core::eval, value::Value};
///
/// let expr = Expr::Negate { expr: Box::new(Expr::Literal { value: 10.into(),
///                                                          line:  1, }),
///                           line: 1, };
/// assert_eq!(eval(&expr).unwrap(), Value::Integer(-10));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(value.clone()),
        Expr::Negate { expr, line } => eval_negate(&eval(expr)?, *line),
        Expr::Call { name, args, line } => {
            let arg_vals = args.iter().map(eval).collect::<EvalResult<Vec<_>>>()?;
            eval_function(name, &arg_vals, *line)
        },
    }
}

/// Negates a numeric value.
///
/// # Errors
/// - `Overflow` when negating `i64::MIN`.
/// - `ExpectedNumber` for booleans and text.
fn eval_negate(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Integer(n) => n.checked_neg()
                              .map(Value::Integer)
                              .ok_or(RuntimeError::Overflow { line }),
        Value::Real(r) => Ok(Value::Real(-r)),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    }
}

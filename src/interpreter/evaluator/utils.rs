use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
    value::Value,
};

/// Typed access to builtin arguments, reporting the script line on mismatch.
impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`.
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use radixa::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_real(42).unwrap(), 10.0);
    /// assert!(Value::from("10").as_real(42).is_err());
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::Overflow { line }),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }
    /// Converts the value to `i64`, or returns an error if not an integer.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub const fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedInteger { line }),
        }
    }
    /// Borrows the text of a `Value::Text`, or returns an error otherwise.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn as_text(&self, line: usize) -> EvalResult<&str> {
        match self {
            Self::Text(s) => Ok(s),
            _ => Err(RuntimeError::ExpectedText { line }),
        }
    }
    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }
}

/// Checks if the argument list matches the expected count.
/// Returns an error if the argument count does not match.
///
/// ## Example
/// ```
/// use radixa::{interpreter::evaluator::utils::check_arity, value::Value};
///
/// let arg_vals = vec![Value::Integer(2), Value::Integer(1)];
///
/// assert!(check_arity("approx_eq", &arg_vals, 2, 15).is_ok());
/// assert!(check_arity("trunc", &arg_vals, 1, 15).is_err());
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  found: args.len(),
                                                  line })
    }
}

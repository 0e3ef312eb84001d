use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::EvalResult,
        function::{approx, builtin, convert, rounding},
    },
    value::Value,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "convert"    => { arity: Arity::Exact(3), func: convert::convert },
    "encode"     => { arity: Arity::OneOf(&[4, 5]), func: convert::encode },
    "decode"     => { arity: Arity::OneOf(&[2, 3]), func: convert::decode },
    "approx_eq"  => { arity: Arity::Exact(2), func: approx::approx_eq },
    "is_close"   => { arity: Arity::Exact(4), func: approx::is_close },
    "trunc"      => { arity: Arity::Exact(1), func: rounding::trunc },
    "round"      => { arity: Arity::Exact(1), func: rounding::round },
    "round_away" => { arity: Arity::Exact(1), func: rounding::round_away },
    "assert"     => { arity: Arity::Exact(1), func: builtin::assert_fn },
    "assert_eq"  => { arity: Arity::Exact(2), func: builtin::assert_eq_fn },
    "print"      => { arity: Arity::Exact(1), func: builtin::print },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

/// Evaluates a call to a builtin function.
///
/// # Errors
/// - `UnknownFunction` if no builtin has this name.
/// - `ArgumentCountMismatch` if the arity does not fit.
/// - Anything the builtin itself reports.
///
/// # Example
/// ```
/// use radixa::{interpreter::evaluator::function::core::eval_function, value::Value};
///
/// let r = eval_function("round_away", &[Value::Real(-2.5)], 1).unwrap();
/// assert_eq!(r, Value::Integer(-3));
///
/// assert!(eval_function("floor", &[Value::Real(2.5)], 1).is_err());
/// ```
pub fn eval_function(name: &str, arg_vals: &[Value], line: usize) -> EvalResult<Value> {
    let builtin = BUILTIN_TABLE.iter()
                               .find(|b| b.name == name)
                               .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                               line })?;

    if !builtin.arity.check(arg_vals.len()) {
        return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                         found: arg_vals.len(),
                                                         line });
    }

    (builtin.func)(arg_vals, line)
}

use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::EvalResult,
        utils::check_arity,
    },
    radix::{self, BaseEncoder},
    value::Value,
};

/// Converts a decimal integer to another base.
///
/// `convert(number, base, digit_map)`
///
/// # Parameters
/// - `args`: Slice containing `[number, base, digit_map]`.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use radixa::{interpreter::evaluator::function::convert::convert, value::Value};
///
/// let r = convert(&[Value::Integer(255), Value::Integer(16), "0123456789ABCDEF".into()],
///                 1).unwrap();
/// assert_eq!(r, Value::from("FF"));
/// ```
pub fn convert(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("convert", args, 3, line)?;

    let number = args[0].as_integer(line)?;
    let base = args[1].as_integer(line)?;
    let digit_map = args[2].as_text(line)?;

    radix::convert(number, base, digit_map).map(Value::Text)
                                           .map_err(RuntimeError::numeric(line))
}

/// Converts a number between two arbitrary bases.
///
/// `encode(number, source_base, to_base, digit_map[, source_digit_map])`
///
/// `number` is a numeral text, or an integer when `source_base` is 10.
///
/// # Example
/// ```
/// use radixa::{interpreter::evaluator::function::convert::encode, value::Value};
///
/// let args = [Value::from("777"), Value::Integer(8), Value::Integer(2), Value::from("01")];
/// assert_eq!(encode(&args, 1).unwrap(), Value::from("111111111"));
/// ```
pub fn encode(args: &[Value], line: usize) -> EvalResult<Value> {
    let source_digit_map = match args.len() {
        4 => None,
        5 => Some(args[4].as_text(line)?),
        found => {
            return Err(RuntimeError::ArgumentCountMismatch { name: "encode".to_string(),
                                                             found,
                                                             line });
        },
    };
    let source_base = args[1].as_integer(line)?;
    let to_base = args[2].as_integer(line)?;
    let digit_map = args[3].as_text(line)?;

    BaseEncoder::with_source_digits(source_base, to_base, digit_map, source_digit_map)
        .and_then(|encoder| encoder.encode(&args[0]))
        .map(Value::Text)
        .map_err(RuntimeError::numeric(line))
}

/// Interprets a numeral in the given base.
///
/// `decode(numeral, base[, digit_map])`
///
/// # Example
/// ```
/// use radixa::{interpreter::evaluator::function::convert::decode, value::Value};
///
/// let r = decode(&[Value::from("-ZZ"), Value::Integer(36)], 1).unwrap();
/// assert_eq!(r, Value::Integer(-1295));
/// ```
pub fn decode(args: &[Value], line: usize) -> EvalResult<Value> {
    let digit_map = match args.len() {
        2 => None,
        3 => Some(args[2].as_text(line)?),
        found => {
            return Err(RuntimeError::ArgumentCountMismatch { name: "decode".to_string(),
                                                             found,
                                                             line });
        },
    };
    let numeral = args[0].as_text(line)?;
    let base = args[1].as_integer(line)?;

    radix::decode(numeral, base, digit_map).map(Value::Integer)
                                           .map_err(RuntimeError::numeric(line))
}

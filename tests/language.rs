use std::fs::{self};

use radixa::{
    error::{ErrorKind, NumericError, ParseError, RuntimeError},
    evaluate, get_result,
    interpreter::evaluator::function::convert,
    value::Value,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_script_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, false) {
                panic!("Script example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No script examples found in book/src");
}

fn extract_script_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```radixa") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    let err = evaluate(src).expect_err("script was expected to fail");
    *err.downcast::<RuntimeError>()
        .unwrap_or_else(|e| panic!("expected a runtime error, got {e}"))
}

#[test]
fn literals_and_negation() {
    assert_eq!(evaluate("42").unwrap(), Some(Value::Integer(42)));
    assert_eq!(evaluate("-42").unwrap(), Some(Value::Integer(-42)));
    assert_eq!(evaluate("-2.5e1").unwrap(), Some(Value::Real(-25.0)));
    assert_eq!(evaluate(".5").unwrap(), Some(Value::Real(0.5)));
    assert_eq!(evaluate("\"01\"").unwrap(), Some(Value::from("01")));
    assert_eq!(evaluate("(true)").unwrap(), Some(Value::Bool(true)));
}

#[test]
fn last_line_is_the_result() {
    let src = "
        // first a conversion
        convert(255, 2, \"01\")

        trunc(9.99)
    ";
    assert_eq!(evaluate(src).unwrap(), Some(Value::Integer(9)));
}

#[test]
fn conversion_builtins() {
    assert_success("assert_eq(convert(255, 16, \"0123456789ABCDEF\"), \"FF\")");
    assert_success("assert_eq(convert(-255, 16, \"0123456789ABCDEF\"), \"-FF\")");
    assert_success("assert_eq(convert(0, 2, \"01\"), \"0\")");
    assert_success("assert_eq(encode(\"11111111\", 2, 16, \"0123456789ABCDEF\"), \"FF\")");
    assert_success("assert_eq(decode(\"FF\", 16), 255)");
    assert_success("assert_eq(decode(convert(-1234, 7, \"0123456\"), 7), -1234)");
}

#[test]
fn rounding_builtins() {
    assert_success("assert_eq(trunc(3.7), 3)");
    assert_success("assert_eq(trunc(-3.7), -3)");
    assert_success("assert_eq(round(2.5), 2)");
    assert_success("assert_eq(round_away(2.5), 3)");
    assert_success("assert_eq(round(-0.5), 0)");
    assert_success("assert_eq(round_away(-0.5), -1)");
}

#[test]
fn invalid_bases_and_digit_maps_fail() {
    assert_failure("convert(10, 1, \"0\")");
    assert_failure("convert(10, 37, \"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ!\")");
    assert_failure("convert(10, 16, \"0123456789ABCDE\")");
    assert_failure("convert(10, 16, \"00123456789ABCDE\")");
    assert_failure("encode(\"12\", 2, 10, \"0123456789\")");
    assert_failure("decode(\"\", 10)");

    match runtime_error("convert(10, 16, \"0123456789ABCDE\")") {
        RuntimeError::Numeric { source, line } => {
            assert_eq!(line, 1);
            assert_eq!(source.kind(), ErrorKind::InvalidArgument);
            assert!(source.to_string().contains("Expected 16 but got 15"), "{source}");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_rounding_is_a_type_error() {
    match runtime_error("\n\ntrunc(\"abc\")") {
        RuntimeError::Numeric { source, line } => {
            assert_eq!(line, 3);
            assert_eq!(source, NumericError::NotANumber { found: "text" });
            assert_eq!(source.kind(), ErrorKind::TypeError);
        },
        other => panic!("unexpected error: {other}"),
    }

    assert_failure("round(true)");
    assert_failure("round_away(\"2.5\")");
}

#[test]
fn argument_errors() {
    assert!(matches!(runtime_error("trunc(1, 2)"),
                     RuntimeError::ArgumentCountMismatch { found: 2, .. }));
    assert!(matches!(runtime_error("encode(1, 10, 2)"),
                     RuntimeError::ArgumentCountMismatch { found: 3, .. }));
    assert!(matches!(runtime_error("floor(2.5)"), RuntimeError::UnknownFunction { .. }));
    assert!(matches!(runtime_error("convert(2.5, 2, \"01\")"),
                     RuntimeError::ExpectedInteger { .. }));
    assert!(matches!(runtime_error("convert(2, 2, 1)"), RuntimeError::ExpectedText { .. }));
    assert!(matches!(runtime_error("approx_eq(\"1\", 1)"),
                     RuntimeError::ExpectedNumber { .. }));
    assert!(matches!(runtime_error("assert(1)"), RuntimeError::ExpectedBoolean { .. }));
    assert!(matches!(runtime_error("-\"abc\""), RuntimeError::ExpectedNumber { .. }));
}

#[test]
fn optional_argument_builtins_check_their_arity() {
    let err = convert::encode(&[Value::from("FF")], 1).unwrap_err();
    assert!(matches!(err, RuntimeError::ArgumentCountMismatch { found: 1, .. }));

    let too_many = vec![Value::Integer(1); 6];
    assert!(matches!(convert::encode(&too_many, 1).unwrap_err(),
                     RuntimeError::ArgumentCountMismatch { found: 6, .. }));

    let err = convert::decode(&[Value::from("FF")], 4).unwrap_err();
    assert!(matches!(err, RuntimeError::ArgumentCountMismatch { found: 1, line: 4, .. }));
    assert!(matches!(convert::decode(&[], 1).unwrap_err(),
                     RuntimeError::ArgumentCountMismatch { found: 0, .. }));
}

#[test]
fn integer_literals_cover_the_full_range() {
    assert_eq!(evaluate("-9223372036854775808").unwrap(), Some(Value::Integer(i64::MIN)));
    assert_eq!(evaluate("9223372036854775807").unwrap(), Some(Value::Integer(i64::MAX)));
    assert_eq!(evaluate("- 5").unwrap(), Some(Value::Integer(-5)));
    assert_success("assert_eq(convert(-9223372036854775808, 16, \"0123456789ABCDEF\"), \"-8000000000000000\")");

    // Negating i64::MIN again overflows at run time.
    assert!(matches!(runtime_error("--9223372036854775808"), RuntimeError::Overflow { .. }));
}

#[test]
fn failing_assertions_report_values() {
    match runtime_error("assert_eq(round(2.5), 3)") {
        RuntimeError::AssertionFailed { details, .. } => {
            assert_eq!(details, "2 (integer) != 3 (integer)");
        },
        other => panic!("unexpected error: {other}"),
    }
    assert_failure("assert(approx_eq(1.0, 1.1))");
    assert_failure("assert_eq(3, 3.0)");
}

#[test]
fn syntax_errors() {
    let parse_error = |src: &str| {
        *evaluate(src).expect_err("script was expected to fail")
                      .downcast::<ParseError>()
                      .unwrap_or_else(|e| panic!("expected a parse error, got {e}"))
    };

    assert!(matches!(parse_error("trunc(1.5"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_error("trunc 1.5"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("1 2"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error("round(2.5))"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error("1 + 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("-"), ParseError::UnexpectedEndOfInput { line: 1 }));
    assert!(matches!(parse_error("\"unterminated"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("9223372036854775808"),
                     ParseError::IntegerOutOfRange { ref literal, line: 1 } if literal == "9223372036854775808"));
    assert!(matches!(parse_error("-9223372036854775809"),
                     ParseError::IntegerOutOfRange { ref literal, .. } if literal == "-9223372036854775809"));
    assert!(matches!(parse_error("99999999999999999999"), ParseError::UnexpectedToken { .. }));
}

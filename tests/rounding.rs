use proptest::prelude::*;
use radixa::{
    approx::{ABS_TOLERANCE, REL_TOLERANCE, approx_equal, approx_equal_with},
    error::{ErrorKind, NumericError},
    rounding::{round, round_away_from_zero, truncate},
    value::Value,
};

#[test]
fn truncates_toward_zero() {
    assert_eq!(truncate(&Value::Real(3.7)).unwrap(), 3);
    assert_eq!(truncate(&Value::Real(-3.7)).unwrap(), -3);
    assert_eq!(truncate(&Value::Real(0.0)).unwrap(), 0);
    assert_eq!(truncate(&Value::Real(-0.0)).unwrap(), 0);
    assert_eq!(truncate(&Value::Real(0.999_999)).unwrap(), 0);
    assert_eq!(truncate(&Value::Real(-0.5)).unwrap(), 0);
    assert_eq!(truncate(&Value::Integer(17)).unwrap(), 17);
    assert_eq!(truncate(&Value::Integer(i64::MIN)).unwrap(), i64::MIN);
}

#[test]
fn truncation_keeps_whole_numbers() {
    assert_eq!(truncate(&Value::Real(1.0)).unwrap(), 1);
    assert_eq!(truncate(&Value::Real(2.0)).unwrap(), 2);
    assert_eq!(truncate(&Value::Real(-5.0)).unwrap(), -5);
}

#[test]
fn truncates_large_magnitudes() {
    assert_eq!(truncate(&Value::Real(4_503_599_627_370_495.5)).unwrap(),
               4_503_599_627_370_495);
    assert_eq!(truncate(&Value::Real(1e18)).unwrap(), 1_000_000_000_000_000_000);
    assert_eq!(truncate(&Value::Real(-9_223_372_036_854_775_808.0)).unwrap(), i64::MIN);

    let err = truncate(&Value::Real(9_223_372_036_854_775_808.0)).unwrap_err();
    assert!(matches!(err, NumericError::OutOfRange { .. }));
    assert!(matches!(truncate(&Value::Real(1e300)).unwrap_err(),
                     NumericError::OutOfRange { .. }));
}

#[test]
fn non_numeric_input_is_a_type_error() {
    for value in [Value::from("abc"), Value::from("3.7"), Value::Bool(true)] {
        for op in [truncate, round, round_away_from_zero] {
            let err = op(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeError);
            assert!(matches!(err, NumericError::NotANumber { .. }));
        }
    }
    assert_eq!(truncate(&Value::from("abc")).unwrap_err().to_string(),
               "Invalid type. Must be integer or real, got text.");
}

#[test]
fn non_finite_input_is_rejected() {
    for r in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        for op in [truncate, round, round_away_from_zero] {
            let err = op(&Value::Real(r)).unwrap_err();
            assert!(matches!(err, NumericError::NonFinite { .. }));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }
}

#[test]
fn round_breaks_ties_to_even() {
    let cases = [(0.5, 0), (1.5, 2), (2.5, 2), (3.5, 4), (-1.5, -2), (-2.5, -2), (2.4, 2),
                 (2.6, 3), (-2.6, -3), (0.49, 0), (7.0, 7)];
    for (input, expected) in cases {
        assert_eq!(round(&Value::Real(input)).unwrap(), expected, "round({input})");
    }
    assert_eq!(round(&Value::Integer(-9)).unwrap(), -9);
}

#[test]
fn round_is_exact_next_to_ties() {
    // The nearest doubles on either side of 2.5.
    assert_eq!(round(&Value::Real(2.500_000_000_000_000_4)).unwrap(), 3);
    assert_eq!(round(&Value::Real(2.499_999_999_999_999_6)).unwrap(), 2);
    assert_eq!(round(&Value::Real(0.500_000_000_000_000_1)).unwrap(), 1);
}

#[test]
fn round_away_breaks_ties_away_from_zero() {
    let cases = [(0.5, 1), (1.5, 2), (2.5, 3), (-2.5, -3), (2.4, 2), (-2.4, -2), (2.6, 3),
                 (0.0, 0), (-0.4, 0)];
    for (input, expected) in cases {
        assert_eq!(round_away_from_zero(&Value::Real(input)).unwrap(),
                   expected,
                   "round_away_from_zero({input})");
    }
    assert_eq!(round_away_from_zero(&Value::Integer(4)).unwrap(), 4);
}

#[test]
fn round_and_round_away_differ_only_on_even_ties() {
    assert_eq!(round(&Value::Real(2.5)).unwrap(), 2);
    assert_eq!(round_away_from_zero(&Value::Real(2.5)).unwrap(), 3);
    assert_eq!(round(&Value::Real(3.5)).unwrap(),
               round_away_from_zero(&Value::Real(3.5)).unwrap());
}

#[test]
fn approx_equal_uses_fixed_tolerances() {
    assert!((REL_TOLERANCE - 1e-12).abs() < f64::EPSILON);
    assert!((ABS_TOLERANCE - 1e-5).abs() < f64::EPSILON);

    assert!(approx_equal(1.0, 1.000_000_1));
    assert!(!approx_equal(1.0, 1.1));
    assert!(approx_equal(0.0, 0.000_009));
    assert!(!approx_equal(0.0, 0.000_011));
    assert!(approx_equal(-3.0, -3.000_001));
    assert!(approx_equal(1e20, 1e20 + 1e7));
    assert!(!approx_equal(1e20, 1e20 + 1e9));
}

#[test]
fn approx_equal_is_strict() {
    // A difference exactly equal to the tolerance is not close.
    assert!(!approx_equal_with(0.0, 0.5, 0.0, 0.5));
    assert!(approx_equal_with(0.0, 0.25, 0.0, 0.5));
    assert!(!approx_equal_with(4.0, 6.0, 0.0, 2.0));
    assert!(!approx_equal_with(1.0, 1.0, 0.0, 0.0));
}

#[test]
fn approx_equal_special_values() {
    assert!(!approx_equal(f64::NAN, f64::NAN));
    assert!(!approx_equal(f64::NAN, 1.0));
    assert!(!approx_equal(f64::INFINITY, f64::INFINITY));
    assert!(!approx_equal(f64::INFINITY, 1e308));
}

proptest! {
    #[test]
    fn truncation_matches_std(x in -1e15_f64..1e15) {
        #[allow(clippy::cast_possible_truncation)]
        let expected = x.trunc() as i64;
        prop_assert_eq!(truncate(&Value::Real(x)).unwrap(), expected);
    }

    #[test]
    fn round_matches_round_ties_even(x in -1e15_f64..1e15) {
        #[allow(clippy::cast_possible_truncation)]
        let expected = x.round_ties_even() as i64;
        prop_assert_eq!(round(&Value::Real(x)).unwrap(), expected);
    }

    #[test]
    fn round_away_is_within_half(x in -1e12_f64..1e12) {
        #[allow(clippy::cast_precision_loss)]
        let rounded = round_away_from_zero(&Value::Real(x)).unwrap() as f64;
        prop_assert!((rounded - x).abs() <= 0.5 + 1e-9, "{x} rounded to {rounded}");
    }

    #[test]
    fn approx_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
        prop_assert_eq!(approx_equal(a, b), approx_equal(b, a));
    }

    #[test]
    fn values_are_close_to_themselves(a in -1e300_f64..1e300) {
        prop_assert!(approx_equal(a, a));
    }
}

/// Relative tolerance used by [`approx_equal`].
pub const REL_TOLERANCE: f64 = 1e-12;
/// Absolute tolerance used by [`approx_equal`].
pub const ABS_TOLERANCE: f64 = 1e-5;

/// Compares two floats with the default tolerances.
///
/// `|a - b| < max(REL_TOLERANCE * max(|a|, |b|), ABS_TOLERANCE)`
///
/// # Example
/// ```
/// use radixa::approx::approx_equal;
///
/// assert!(approx_equal(1.0, 1.000_000_1));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[must_use]
pub fn approx_equal(a: f64, b: f64) -> bool {
    approx_equal_with(a, b, REL_TOLERANCE, ABS_TOLERANCE)
}

/// Compares two floats with explicit tolerances.
///
/// The comparison is strict: a difference exactly equal to the tolerance is
/// not close. NaN is never close to anything, and since `inf - inf` is NaN,
/// neither are two equal infinities.
///
/// # Parameters
/// - `a`, `b`: Values to compare.
/// - `rel_tolerance`: Tolerance relative to the larger magnitude.
/// - `abs_tolerance`: Lower bound on the tolerance.
///
/// # Example
/// ```
/// use radixa::approx::approx_equal_with;
///
/// assert!(approx_equal_with(100.0, 100.9, 0.01, 0.0));
/// assert!(!approx_equal_with(0.0, 0.5, 0.0, 0.5));
/// ```
#[must_use]
pub fn approx_equal_with(a: f64, b: f64, rel_tolerance: f64, abs_tolerance: f64) -> bool {
    let max_norm = a.abs().max(b.abs());
    let tolerance = (rel_tolerance * max_norm).max(abs_tolerance);

    (a - b).abs() < tolerance
}

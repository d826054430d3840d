//! Float assertions shared by the workspace's tests.

/// Maps an `f64` onto a `u64` whose ordering matches the float ordering,
/// so the distance between two mapped values counts representable doubles.
#[inline]
pub fn ordered_bits(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits >> 63 == 1 {
        !bits
    } else {
        bits | (1 << 63)
    }
}

#[inline]
pub fn ulp_distance(a: f64, b: f64) -> u64 {
    ordered_bits(a).abs_diff(ordered_bits(b))
}

/// Asserts `|actual - expected| <= tol * |expected|`; exact match required when `expected` is zero.
#[track_caller]
pub fn assert_relative_eq(actual: f64, expected: f64, tol: f64, ctx: &str) {
    assert!(actual.is_finite(), "{ctx}: non-finite value {actual}");
    let allowed = tol * expected.abs();
    assert!(
        (actual - expected).abs() <= allowed,
        "{ctx}: expected {expected} ± {allowed}, got {actual}"
    );
}

/// Asserts `|actual - expected| <= tol`.
#[track_caller]
pub fn assert_abs_eq(actual: f64, expected: f64, tol: f64, ctx: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{ctx}: expected {expected} ± {tol}, got {actual}"
    );
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    let d = ulp_distance(a, b);
    assert!(
        d <= max_ulp,
        "{ctx}: ULP={d} exceeds {max_ulp}, a={a} (0x{:016x}) b={b} (0x{:016x})",
        a.to_bits(),
        b.to_bits()
    );
}

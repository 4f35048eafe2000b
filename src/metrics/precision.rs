//! Numeric precision functions for indicator values
//!
//! Every indicator is rounded before it is stored so snapshots compare
//! exactly and render without floating-point noise.

/// Round a ratio to 3 decimal places (rates, coverage fractions)
///
/// Removes floating-point noise like 0.8888888888888888 -> 0.889
#[inline]
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 1000.0).round() / 1000.0
}

/// Round a magnitude to 2 decimal places (densities, averages, productivity)
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Divide, returning 0.0 for a zero denominator
#[inline]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Assert ratio invariants: value in 0.0..=1.0
#[inline]
pub fn assert_ratio_invariants(ratio: f64, context: &str) {
    debug_assert!(
        (0.0..=1.0).contains(&ratio),
        "{} must be in range [0.0, 1.0]: {}",
        context,
        ratio
    );
}

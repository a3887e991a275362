//! Assertion utilities for testing.
//!
//! Floating-point comparisons for values read back from JSON responses.

/// Default relative tolerance for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Assert that two values are equal within a relative tolerance.
///
/// # Panics
///
/// Panics if `|actual - expected| > epsilon * max(1, |expected|)`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();
    let tolerance = epsilon * expected.abs().max(1.0);

    assert!(
        diff <= tolerance,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, tolerance = {}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Read a numeric field from a JSON object, panicking with the field name if absent
pub fn number_field(json: &serde_json::Value, field: &str) -> f64 {
    json.get(field)
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| panic!("Missing numeric field `{}` in {}", field, json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(137_624_016.912, 137_624_016.912_000_01, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_number_field() {
        let json = serde_json::json!({ "massLoss": 2.5 });
        assert_eq!(number_field(&json, "massLoss"), 2.5);
    }
}

//! Custom assertions for validation results.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use kr_phone::{validate, IssueKind, PhoneClass, ValidationResult};

/// Asserts that a number validates with the given class and returns the result.
///
/// # Panics
/// Panics if the number is invalid or has a different class.
pub fn assert_valid(raw: &str, class: PhoneClass) -> ValidationResult {
    let result = validate(raw);
    assert!(
        result.is_valid,
        "'{}' should be valid but got errors: {:?}",
        raw,
        result.messages()
    );
    assert_eq!(result.class, class, "'{}' classified as {}", raw, result.class);
    assert!(result.errors.is_empty());
    result
}

/// Asserts that a number is rejected with at least one issue of `kind`.
///
/// # Panics
/// Panics if the number is valid or no issue has the expected kind.
pub fn assert_rejected(raw: &str, kind: IssueKind) -> ValidationResult {
    let result = validate(raw);
    assert!(!result.is_valid, "'{}' should be rejected", raw);
    assert!(
        result.has_issue(kind),
        "'{}' should have a {} issue, got {:?}",
        raw,
        kind,
        result.errors
    );
    assert_failure_shape(&result);
    result
}

/// Asserts the invariants every failed result must hold.
pub fn assert_failure_shape(result: &ValidationResult) {
    assert!(!result.is_valid);
    assert!(
        result.normalized.is_empty(),
        "failed result for '{}' leaked normalized '{}'",
        result.raw,
        result.normalized
    );
    assert!(result.formatted.is_empty());
    assert!(result.carrier.is_none());
    assert!(!result.errors.is_empty(), "failed result must explain itself");
}

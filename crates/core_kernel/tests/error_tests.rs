//! Tests for core_kernel error types

use core_kernel::error::CoreError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("poor DTI below fair DTI");
    assert_eq!(
        error.to_string(),
        "Configuration error: poor DTI below fair DTI"
    );
}

#[test]
fn test_date_out_of_range_display() {
    let error = CoreError::DateOutOfRange("+262142-12-31 + 1 months".to_string());
    assert!(error.to_string().starts_with("Date out of range"));
}

use super::*;

#[test]
fn validate_forgot_normalizes_email() {
    assert_eq!(validate_forgot(" Ann@Example.com").unwrap().email, "ann@example.com");
}

#[test]
fn validate_forgot_requires_email() {
    assert_eq!(validate_forgot("   ").unwrap_err(), "Email is required.");
}

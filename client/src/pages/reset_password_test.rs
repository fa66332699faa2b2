use super::*;

#[test]
fn validate_reset_builds_request() {
    let request = validate_reset("Ann@Example.com", "123-456", "N3w!pass").unwrap();
    assert_eq!(request.email, "ann@example.com");
    assert_eq!(request.otp, "123456");
    assert_eq!(request.new_password, "N3w!pass");
}

#[test]
fn validate_reset_reports_first_missing_field() {
    assert_eq!(validate_reset("", "", "").unwrap_err(), "Email is required.");
    assert_eq!(validate_reset("a@b.co", "", "").unwrap_err(), "Reset code is required.");
    assert_eq!(validate_reset("a@b.co", "123", "").unwrap_err(), "Enter the 6-digit code from your email.");
    assert_eq!(validate_reset("a@b.co", "123456", "").unwrap_err(), "New password is required.");
}

//! Client-side form checks.
//!
//! These mirror the backend's rules closely enough to catch typos before a
//! round trip; the backend stays authoritative.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use chrono::NaiveDate;

use crate::state::booking::BookingForm;
use crate::util::calendar::is_past;

pub const NAME_MIN_CHARS: usize = 2;
pub const PHONE_MIN_DIGITS: usize = 8;
pub const MESSAGE_MAX_CHARS: usize = 2000;
pub const OTP_LEN: usize = 6;

/// Shown under password inputs; enforcement happens server-side.
pub const PASSWORD_HINT: &str = "Min 8 characters, one uppercase, one lowercase, one digit, one special character.";

/// Per-field booking errors. `None` means the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub slot: Option<String>,
    pub message: Option<String>,
}

impl BookingErrors {
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        [&self.name, &self.email, &self.phone, &self.service, &self.date, &self.slot, &self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Check every booking field at once; all violations are reported together.
pub fn validate_booking(
    form: &BookingForm,
    date: Option<NaiveDate>,
    slot: Option<&str>,
    today: NaiveDate,
) -> BookingErrors {
    let name = form.name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();

    BookingErrors {
        name: if name.is_empty() {
            Some("Name is required.".to_owned())
        } else if name.chars().count() < NAME_MIN_CHARS {
            Some("Name must be at least 2 characters.".to_owned())
        } else {
            None
        },
        email: if email.is_empty() {
            Some("Email is required.".to_owned())
        } else if !is_valid_email(email) {
            Some("Please enter a valid email.".to_owned())
        } else {
            None
        },
        phone: if phone.is_empty() {
            Some("Phone is required.".to_owned())
        } else if digit_count(phone) < PHONE_MIN_DIGITS {
            Some("Please enter a valid phone number.".to_owned())
        } else {
            None
        },
        service: form
            .service
            .trim()
            .is_empty()
            .then(|| "Please select a service.".to_owned()),
        date: match date {
            None => Some("Please choose a date.".to_owned()),
            Some(d) if is_past(d, today) => Some("Please choose a date that is not in the past.".to_owned()),
            Some(_) => None,
        },
        slot: slot
            .is_none_or(|s| s.trim().is_empty())
            .then(|| "Please choose a time slot.".to_owned()),
        message: (form.message.chars().count() > MESSAGE_MAX_CHARS)
            .then(|| format!("Message must be {MESSAGE_MAX_CHARS} characters or fewer.")),
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Keep only digits, capped at the OTP length.
pub fn normalize_otp_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect()
}

/// Auth endpoints match emails case-insensitively; send them lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Accept only same-site absolute paths as post-login redirect targets.
pub fn safe_redirect_path(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path.to_owned(),
        _ => "/".to_owned(),
    }
}

//! Shared REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde decoding stays
//! lossless. Optional/derived fields use `#[serde(default)]` because older
//! backend builds omit them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A dentist profile as returned by `/dentists/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dentist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub philosophy: String,
    /// Newline-delimited certification list.
    #[serde(default)]
    pub certifications: String,
    /// Portrait URL, if one was uploaded.
    #[serde(default)]
    pub image: Option<String>,
}

impl Dentist {
    /// Split `certifications` into non-blank trimmed lines.
    pub fn certification_list(&self) -> Vec<String> {
        split_lines(&self.certifications)
    }
}

/// A clinic service as returned by `/services/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    /// Raw newline-delimited benefits text.
    #[serde(default)]
    pub benefits: String,
    /// Server-side split of `benefits`; absent on some backends.
    #[serde(default)]
    pub benefits_list: Vec<String>,
    #[serde(default)]
    pub experience_highlight: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i32,
}

impl Service {
    /// Benefits to display, preferring the pre-split list.
    pub fn benefit_items(&self) -> Vec<String> {
        if self.benefits_list.is_empty() {
            split_lines(&self.benefits)
        } else {
            self.benefits_list.clone()
        }
    }
}

/// One bookable time slot for a date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Time-of-day value sent back on booking (e.g. `"09:00"`).
    pub time: String,
    /// Display label (e.g. `"9:00 AM"`).
    pub label: String,
}

/// Booking request body for `POST /appointments/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    /// `YYYY-MM-DD`.
    pub preferred_date: String,
    pub slot_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Minimal user record returned by login and persisted in storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token pair plus user returned by `POST /auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: String,
    pub user: AuthUser,
}

#[derive(Clone, Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

/// Informational reply (`{"detail": "..."}`) from auth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub detail: String,
}

/// Selectable services on the booking form as `(value, label)`.
pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("general", "General Dentistry"),
    ("cleaning", "Teeth Cleaning & Polishing"),
    ("root_canal", "Root Canal Treatment"),
    ("extraction", "Tooth Extraction"),
    ("implants", "Dental Implants"),
    ("orthodontics", "Braces & Orthodontics"),
    ("whitening", "Teeth Whitening"),
    ("cosmetic", "Cosmetic Dentistry"),
    ("pediatric", "Pediatric Dentistry"),
    ("gum_treatment", "Gum Treatment"),
];

/// Look up the display label for a service option value.
pub fn service_label(value: &str) -> Option<&'static str> {
    SERVICE_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (signals, API calls, navigation)
//! and delegates rendering details to `components`. Form checks live next to
//! the page as plain functions so they can be unit tested without a browser.

pub mod about;
pub mod book;
pub mod contact;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod reset_password;
pub mod services;
pub mod signup;
pub mod verify_email;

/// Prefer the backend's `detail` text, falling back to `default` when blank.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn detail_or(detail: String, default: &str) -> String {
    if detail.trim().is_empty() { default.to_owned() } else { detail }
}

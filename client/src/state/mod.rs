//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `booking`) so pages can depend on small
//! focused models that are testable without a browser.

pub mod auth;
pub mod booking;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure form/date
//! logic from page and component code to improve reuse and testability.

pub mod auth;
pub mod calendar;
pub mod storage;
pub mod validation;

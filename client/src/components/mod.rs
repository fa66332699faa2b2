//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the booking widgets while reading and
//! writing state owned by pages or Leptos context providers.

pub mod calendar_grid;
pub mod footer;
pub mod header;
pub mod service_card;
pub mod slot_picker;

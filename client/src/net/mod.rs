//! Networking modules for the clinic REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and normalizes failures; `types` defines the
//! JSON schema shared with the backend.

pub mod api;
pub mod types;

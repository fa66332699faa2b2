//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the header mutate the session only through these helpers so the
//! signal, browser storage, and other tabs stay in agreement.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::AuthUser;
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

/// Re-sync `auth` whenever another tab (or this one) touches storage.
///
/// The listener is removed when the owning reactive scope is cleaned up.
pub fn install_storage_sync(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener_untyped("storage", move |_| {
            let mut changed = false;
            auth.update(|state| changed = state.sync(&BrowserStorage));
            if changed {
                leptos::logging::log!("auth state synced from storage");
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Persist a fresh session and publish the user.
pub fn sign_in(auth: RwSignal<AuthState>, token: &str, user: AuthUser) {
    auth.update(|state| state.sign_in(&BrowserStorage, token, user));
}

/// Drop the session here and notify same-tab listeners.
///
/// Browsers only fire `storage` in *other* tabs, so a synthetic event keeps
/// any extra listeners in this tab consistent.
pub fn sign_out(auth: RwSignal<AuthState>) {
    auth.update(|state| state.sign_out(&BrowserStorage));
    #[cfg(feature = "hydrate")]
    {
        if let (Some(window), Ok(event)) = (web_sys::window(), web_sys::Event::new("storage")) {
            let _ = window.dispatch_event(&event);
        }
        leptos::logging::log!("signed out");
    }
}

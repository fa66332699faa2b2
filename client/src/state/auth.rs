//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session (access token + user record) lives in storage under two keys;
//! `AuthState` is the in-memory view of it. Every tab holds its own
//! `AuthState` and re-reads storage on `storage` events, so a sign-out in one
//! tab reaches the others without a reload.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthUser;
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "drji_access_token";
/// Storage key for the JSON-encoded `AuthUser`.
pub const USER_KEY: &str = "drji_user";

/// Authentication state tracking the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
}

impl AuthState {
    /// Build state from storage. A user counts only when a token is stored too.
    pub fn from_store(store: &impl KeyValueStore) -> Self {
        Self { user: stored_user(store) }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Persist the session and mark `user` as signed in.
    pub fn sign_in(&mut self, store: &impl KeyValueStore, token: &str, user: AuthUser) {
        store.set(TOKEN_KEY, token);
        save_json(store, USER_KEY, &user);
        self.user = Some(user);
    }

    /// Remove both session keys and clear the user.
    pub fn sign_out(&mut self, store: &impl KeyValueStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.user = None;
    }

    /// Re-read storage; returns `true` when the user changed.
    pub fn sync(&mut self, store: &impl KeyValueStore) -> bool {
        let next = stored_user(store);
        if next == self.user {
            return false;
        }
        self.user = next;
        true
    }
}

/// Current bearer token, if a non-blank one is stored.
pub fn stored_token(store: &impl KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

fn stored_user(store: &impl KeyValueStore) -> Option<AuthUser> {
    stored_token(store)?;
    load_json(store, USER_KEY)
}

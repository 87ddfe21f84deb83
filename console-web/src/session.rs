//! Injected session capability.
//!
//! Browser storage is only touched here; components reach the session
//! through context instead of reading ambient globals. The sign-in flow
//! (outside this app) provisions the bearer token and the `user` blob.

use dioxus::prelude::*;

use console_domain::PackerRecord;

const TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "user";
const PACKERS_CACHE_KEY: &str = "packersCache";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

fn read_key(storage: Option<web_sys::Storage>, key: &str) -> Option<String> {
    let storage = storage?;
    let value = storage.get_item(key).ok()??;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl SessionStore {
    /// Bearer token; localStorage first, sessionStorage fallback.
    pub fn token(&self) -> Option<String> {
        read_key(local_storage(), TOKEN_KEY).or_else(|| read_key(session_storage(), TOKEN_KEY))
    }

    /// Display name of the signed-in user, from the stored `user` blob.
    pub fn user_display_name(&self) -> Option<String> {
        let raw = read_key(local_storage(), USER_KEY)?;
        let user: serde_json::Value = serde_json::from_str(&raw).ok()?;
        ["name", "username", "displayName"].iter().find_map(|key| {
            user.get(key)
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })
    }

    /// Advisory cache of the active-packer list; no expiry or version
    /// check. Read optimistically at mount, replaced after a fresh fetch.
    pub fn cache_packers(&self, packers: &[PackerRecord]) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Ok(payload) = serde_json::to_string(packers) {
            let _ = storage.set_item(PACKERS_CACHE_KEY, &payload);
        }
    }

    pub fn cached_packers(&self) -> Vec<PackerRecord> {
        let Some(raw) = read_key(local_storage(), PACKERS_CACHE_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }
}

/// Flipped by any fetch that comes back 401; the app shell swaps the whole
/// view to the sign-in boundary.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionExpired(pub Signal<bool>);

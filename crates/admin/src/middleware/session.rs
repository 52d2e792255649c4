//! Session middleware configuration.
//!
//! Cookie-based sessions backed by the in-memory store - there is no
//! database anywhere in the system, so session state lives for the life of
//! the process while the cookie survives browser reloads. Strict settings
//! (SameSite=Strict, 24hr inactivity expiry).

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "stockpile_session";

/// Session expiry time in seconds (24 hours of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with the in-memory store.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        // The panel binds plain HTTP inside the operator network; TLS is
        // terminated upstream, so the cookie cannot be marked Secure here.
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}

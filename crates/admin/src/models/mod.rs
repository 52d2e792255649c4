//! Domain models owned by the admin panel.

pub mod session;

pub use session::{CurrentUser, session_keys};

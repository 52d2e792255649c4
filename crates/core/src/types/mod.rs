//! Core types for Stockpile.
//!
//! Everything the remote inventory API serializes over the wire lives here.

pub mod envelope;
pub mod records;
pub mod role;

pub use envelope::Envelope;
pub use records::*;
pub use role::{PermissionLevel, RESTRICTED_LEVEL, SUPER_ADMIN_LEVEL, permission_level_for_role};

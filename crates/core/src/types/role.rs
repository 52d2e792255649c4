//! Permission tiers derived from the backend's role strings.

/// Coarse authorization tier: `1` is the super-admin level with full
/// access, higher values only see the menu entries that list them.
pub type PermissionLevel = u8;

/// The tier that sees everything regardless of per-entry allow-sets.
pub const SUPER_ADMIN_LEVEL: PermissionLevel = 1;

/// The tier every non-admin role collapses to.
pub const RESTRICTED_LEVEL: PermissionLevel = 2;

/// Derive the permission level from a role string.
///
/// The backend issues free-form role names but only `"admin"` is
/// privileged; `"manager"`, `"staff"`, and anything else share the
/// restricted tier. Derived once at login and stored in the session.
#[must_use]
pub fn permission_level_for_role(role: &str) -> PermissionLevel {
    if role == "admin" {
        SUPER_ADMIN_LEVEL
    } else {
        RESTRICTED_LEVEL
    }
}

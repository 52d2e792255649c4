//! Sidebar navigation and its permission filter.

use stockpile_core::{PermissionLevel, SUPER_ADMIN_LEVEL};

/// One sidebar entry: where it goes and which permission levels see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub title: &'static str,
    pub href: &'static str,
    pub allow: &'static [PermissionLevel],
}

/// The full menu, in display order.
///
/// The allow-sets are carried over from the product definition as data.
/// Login only ever issues levels 1 and 2, so entries allowing only level 3
/// are reachable exclusively through the super-admin override below.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        title: "Dashboard",
        href: "/dashboard",
        allow: &[1],
    },
    NavEntry {
        title: "Product",
        href: "/dashboard/product",
        allow: &[3],
    },
    NavEntry {
        title: "Category",
        href: "/dashboard/category",
        allow: &[2],
    },
    NavEntry {
        title: "Suppliers",
        href: "/dashboard/suppliers",
        allow: &[2],
    },
    NavEntry {
        title: "Transaction",
        href: "/dashboard/transactions",
        allow: &[1],
    },
    NavEntry {
        title: "Audit log",
        href: "/dashboard/audit-log",
        allow: &[1],
    },
];

/// The menu as one permission level sees it, original order preserved.
///
/// Level 1 is checked before any allow-set on purpose: the super-admin sees
/// every entry, including entries whose allow-set does not list level 1.
#[must_use]
pub fn visible_entries(level: PermissionLevel) -> Vec<NavEntry> {
    NAV_ENTRIES
        .iter()
        .filter(|entry| level == SUPER_ADMIN_LEVEL || entry.allow.contains(&level))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_admin_sees_everything_in_order() {
        let entries = visible_entries(1);
        let titles: Vec<_> = entries.iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            [
                "Dashboard",
                "Product",
                "Category",
                "Suppliers",
                "Transaction",
                "Audit log"
            ]
        );
    }

    #[test]
    fn super_admin_overrides_allow_sets_that_exclude_level_one() {
        // "Product" allows only level 3, yet level 1 still sees it.
        let entries = visible_entries(1);
        assert!(entries.iter().any(|e| e.title == "Product"));
    }

    #[test]
    fn restricted_level_sees_only_its_entries() {
        let entries = visible_entries(2);
        let titles: Vec<_> = entries.iter().map(|e| e.title).collect();
        assert_eq!(titles, ["Category", "Suppliers"]);
    }

    #[test]
    fn level_three_sees_only_the_product_entry() {
        let entries = visible_entries(3);
        let titles: Vec<_> = entries.iter().map(|e| e.title).collect();
        assert_eq!(titles, ["Product"]);
    }

    #[test]
    fn unknown_levels_see_nothing() {
        assert!(visible_entries(0).is_empty());
        assert!(visible_entries(9).is_empty());
    }
}

use data::user::Role;

use crate::access::{Page, capabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Calendar,
    Audit,
    Persons,
    Users,
    Export,
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub icon: Icon,
}

impl NavItem {
    pub fn route(&self) -> &'static str {
        self.page.route()
    }
}

/// Shared by the sidebar and the mobile menu.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        page: Page::Calendar,
        label: "Kalender",
        icon: Icon::Calendar,
    },
    NavItem {
        page: Page::Audit,
        label: "Audit-Log",
        icon: Icon::Audit,
    },
    NavItem {
        page: Page::Users,
        label: "Benutzerverwaltung",
        icon: Icon::Users,
    },
    NavItem {
        page: Page::Persons,
        label: "Personen",
        icon: Icon::Persons,
    },
    NavItem {
        page: Page::Export,
        label: "Daten-Export",
        icon: Icon::Export,
    },
    NavItem {
        page: Page::Stats,
        label: "Statistik",
        icon: Icon::Stats,
    },
];

/// Items for the given role. Without a stored role every item is listed and
/// the page gate has the last word.
pub fn visible_items(role: Option<Role>) -> Vec<NavItem> {
    match role {
        Some(role) => {
            let allowed = capabilities(role);
            NAV_ITEMS
                .iter()
                .filter(|item| allowed.contains(item.page.capability()))
                .copied()
                .collect()
        }
        None => NAV_ITEMS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes(role: Option<Role>) -> Vec<&'static str> {
        visible_items(role).iter().map(NavItem::route).collect()
    }

    #[test]
    fn admin_gets_every_item() {
        assert_eq!(routes(Some(Role::Admin)).len(), NAV_ITEMS.len());
    }

    #[test]
    fn planner_items() {
        assert_eq!(
            routes(Some(Role::Planner)),
            vec!["/calendar", "/audit", "/admin"]
        );
    }

    #[test]
    fn accounting_items() {
        assert_eq!(
            routes(Some(Role::Buchhaltung)),
            vec!["/calendar", "/audit", "/admin", "/export", "/stats"]
        );
    }

    #[test]
    fn no_role_lists_everything() {
        assert_eq!(routes(None).len(), NAV_ITEMS.len());
    }
}

//! Role based gating of pages and plan actions.
//!
//! Purely a UI convenience. The backend checks every request again.

use data::plan::Plan;
use data::user::Role;
use enumflags2::{BitFlags, bitflags};

use crate::session::Session;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/calendar";

#[bitflags]
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capability {
    ViewCalendar = 0b0000_0000_0001,
    ViewAudit = 0b0000_0000_0010,
    ManagePersons = 0b0000_0000_0100,
    ManageUsers = 0b0000_0000_1000,
    Export = 0b0000_0001_0000,
    ViewStats = 0b0000_0010_0000,
    ConfirmPlans = 0b0000_0100_0000,
    DeleteDraftPlans = 0b0000_1000_0000,
    DeleteConfirmedPlans = 0b0001_0000_0000,
}

/// What every signed in session may do, with or without a stored role.
pub fn signed_in() -> BitFlags<Capability> {
    Capability::ViewCalendar | Capability::ViewAudit | Capability::ManagePersons
}

pub fn capabilities(role: Role) -> BitFlags<Capability> {
    match role {
        Role::Admin => BitFlags::all(),
        Role::Planner => signed_in() | Capability::DeleteDraftPlans,
        Role::Buchhaltung => signed_in() | Capability::Export | Capability::ViewStats,
    }
}

pub fn capabilities_of(role: Option<Role>) -> BitFlags<Capability> {
    role.map(capabilities).unwrap_or_else(signed_in)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Calendar,
    Audit,
    Persons,
    Users,
    Export,
    Stats,
}

impl Page {
    pub fn route(&self) -> &'static str {
        match self {
            Page::Calendar => "/calendar",
            Page::Audit => "/audit",
            Page::Persons => "/admin",
            Page::Users => "/users",
            Page::Export => "/export",
            Page::Stats => "/stats",
        }
    }

    pub fn capability(&self) -> Capability {
        match self {
            Page::Calendar => Capability::ViewCalendar,
            Page::Audit => Capability::ViewAudit,
            Page::Persons => Capability::ManagePersons,
            Page::Users => Capability::ManageUsers,
            Page::Export => Capability::Export,
            Page::Stats => Capability::ViewStats,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allow,
    Redirect(&'static str),
}

pub fn gate(session: &Session, page: Page) -> Gate {
    if !session.is_authenticated() {
        Gate::Redirect(LOGIN_ROUTE)
    } else if capabilities_of(session.role).contains(page.capability()) {
        Gate::Allow
    } else {
        Gate::Redirect(HOME_ROUTE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanActions {
    pub confirm: bool,
    pub delete: bool,
}

pub fn plan_actions(role: Option<Role>, plan: &Plan) -> PlanActions {
    let Some(role) = role else {
        return PlanActions::default();
    };
    let capabilities = capabilities(role);

    let delete_capability = if plan.confirmed {
        Capability::DeleteConfirmedPlans
    } else {
        Capability::DeleteDraftPlans
    };

    PlanActions {
        confirm: !plan.confirmed && capabilities.contains(Capability::ConfirmPlans),
        delete: capabilities.contains(delete_capability),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testware::{at, create_test_plan, create_test_user};

    fn session(token: bool, role: Option<Role>) -> Session {
        Session {
            token: token.then(|| "token".to_string()),
            role,
            claims: None,
        }
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        for page in [
            Page::Calendar,
            Page::Audit,
            Page::Persons,
            Page::Users,
            Page::Export,
            Page::Stats,
        ] {
            assert_eq!(gate(&session(false, None), page), Gate::Redirect("/login"));
            assert_eq!(
                gate(&session(false, Some(Role::Admin)), page),
                Gate::Redirect("/login")
            );
        }
    }

    #[test]
    fn role_outside_page_is_sent_to_calendar() {
        let planner = session(true, Some(Role::Planner));
        assert_eq!(gate(&planner, Page::Export), Gate::Redirect("/calendar"));
        assert_eq!(gate(&planner, Page::Stats), Gate::Redirect("/calendar"));
        assert_eq!(gate(&planner, Page::Users), Gate::Redirect("/calendar"));
        assert_eq!(gate(&planner, Page::Calendar), Gate::Allow);

        let accounting = session(true, Some(Role::Buchhaltung));
        assert_eq!(gate(&accounting, Page::Export), Gate::Allow);
        assert_eq!(gate(&accounting, Page::Stats), Gate::Allow);
        assert_eq!(gate(&accounting, Page::Users), Gate::Redirect("/calendar"));
    }

    #[test]
    fn admin_sees_everything() {
        let admin = session(true, Some(Role::Admin));
        assert_eq!(gate(&admin, Page::Users), Gate::Allow);
        assert_eq!(gate(&admin, Page::Export), Gate::Allow);
    }

    #[test]
    fn missing_role_only_opens_shared_pages() {
        let unknown = session(true, None);
        assert_eq!(gate(&unknown, Page::Calendar), Gate::Allow);
        assert_eq!(gate(&unknown, Page::Persons), Gate::Allow);
        assert_eq!(gate(&unknown, Page::Users), Gate::Redirect("/calendar"));
    }

    #[test]
    fn plan_affordances() {
        let user = create_test_user(1, "anna", Role::Planner);
        let draft = create_test_plan(1, &user, at(2024, 6, 10, 0), false);
        let confirmed = create_test_plan(2, &user, at(2024, 6, 10, 0), true);

        let admin = Some(Role::Admin);
        assert_eq!(
            plan_actions(admin, &draft),
            PlanActions {
                confirm: true,
                delete: true
            }
        );
        assert_eq!(
            plan_actions(admin, &confirmed),
            PlanActions {
                confirm: false,
                delete: true
            }
        );

        let planner = Some(Role::Planner);
        assert_eq!(
            plan_actions(planner, &draft),
            PlanActions {
                confirm: false,
                delete: true
            }
        );
        assert_eq!(plan_actions(planner, &confirmed), PlanActions::default());

        assert_eq!(
            plan_actions(Some(Role::Buchhaltung), &draft),
            PlanActions::default()
        );
        assert_eq!(plan_actions(None, &draft), PlanActions::default());
    }
}

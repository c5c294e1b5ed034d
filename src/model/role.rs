//! Roles and capabilities
//!
//! A closed role enumeration and static capability tables. Menu visibility
//! and action availability are both answered here, checked once per render
//! instead of scattered string comparisons.

/// Account role as issued by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Tenant,
    Staff,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Tenant => "Tenant",
            Role::Staff => "Staff",
        }
    }
}

/// The six resource screens, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Offices,
    Bookings,
    Contracts,
    Payments,
    Requests,
    Tenants,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Offices,
        Screen::Bookings,
        Screen::Contracts,
        Screen::Payments,
        Screen::Requests,
        Screen::Tenants,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Offices => "Offices",
            Screen::Bookings => "Bookings",
            Screen::Contracts => "Contracts",
            Screen::Payments => "Payments",
            Screen::Requests => "Requests",
            Screen::Tenants => "Tenants",
        }
    }

    fn menu_roles(self) -> &'static [Role] {
        match self {
            Screen::Offices | Screen::Bookings | Screen::Payments | Screen::Requests => {
                &[Role::Admin, Role::Tenant, Role::Staff]
            }
            Screen::Contracts => &[Role::Admin, Role::Tenant],
            Screen::Tenants => &[Role::Admin],
        }
    }

    /// Whether the screen appears in the menu for `role`.
    pub fn allows(self, role: Role) -> bool {
        self.menu_roles().contains(&role)
    }
}

/// Mutating actions a screen can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Create,
    Edit,
    Delete,
    AdvanceStatus,
    SweepOverdue,
}

/// screen x action -> allowed roles.
pub fn permits(screen: Screen, action: Action, role: Role) -> bool {
    use Action::*;
    use Role::*;
    use Screen::*;

    let allowed: &[Role] = match (screen, action) {
        (Offices, Create | Edit | Delete) => &[Admin],
        (Bookings, Create | Delete) => &[Admin, Tenant],
        (Payments, Create) => &[Admin, Tenant],
        (Payments, SweepOverdue) => &[Admin, Staff],
        (Requests, Create | Delete) => &[Admin, Tenant],
        (Requests, AdvanceStatus) => &[Staff],
        _ => &[],
    };
    allowed.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_for(role: Role) -> Vec<Screen> {
        Screen::ALL.into_iter().filter(|s| s.allows(role)).collect()
    }

    #[test]
    fn test_admin_sees_every_screen() {
        assert_eq!(menu_for(Role::Admin).len(), Screen::ALL.len());
    }

    #[test]
    fn test_tenant_never_sees_tenants() {
        let menu = menu_for(Role::Tenant);
        assert!(!menu.contains(&Screen::Tenants));
        assert_eq!(
            menu,
            vec![
                Screen::Offices,
                Screen::Bookings,
                Screen::Contracts,
                Screen::Payments,
                Screen::Requests,
            ]
        );
    }

    #[test]
    fn test_staff_sees_neither_tenants_nor_contracts() {
        let menu = menu_for(Role::Staff);
        assert!(!menu.contains(&Screen::Tenants));
        assert!(!menu.contains(&Screen::Contracts));
    }

    #[test]
    fn test_only_admin_mutates_offices() {
        for action in [Action::Create, Action::Edit, Action::Delete] {
            assert!(permits(Screen::Offices, action, Role::Admin));
            assert!(!permits(Screen::Offices, action, Role::Tenant));
            assert!(!permits(Screen::Offices, action, Role::Staff));
        }
    }

    #[test]
    fn test_staff_only_advances_requests() {
        assert!(permits(Screen::Requests, Action::AdvanceStatus, Role::Staff));
        assert!(!permits(Screen::Requests, Action::Create, Role::Staff));
        assert!(!permits(Screen::Requests, Action::Delete, Role::Staff));
        assert!(!permits(
            Screen::Requests,
            Action::AdvanceStatus,
            Role::Tenant
        ));
    }

    #[test]
    fn test_sweep_is_admin_or_staff() {
        assert!(permits(Screen::Payments, Action::SweepOverdue, Role::Admin));
        assert!(permits(Screen::Payments, Action::SweepOverdue, Role::Staff));
        assert!(!permits(Screen::Payments, Action::SweepOverdue, Role::Tenant));
    }

    #[test]
    fn test_read_only_screens_offer_no_actions() {
        for action in [
            Action::Create,
            Action::Edit,
            Action::Delete,
            Action::AdvanceStatus,
            Action::SweepOverdue,
        ] {
            for role in [Role::Admin, Role::Tenant, Role::Staff] {
                assert!(!permits(Screen::Contracts, action, role));
                assert!(!permits(Screen::Tenants, action, role));
            }
        }
    }

    #[test]
    fn test_role_wire_form() {
        let role: Role = serde_json::from_str("\"tenant\"").unwrap();
        assert_eq!(role, Role::Tenant);
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}

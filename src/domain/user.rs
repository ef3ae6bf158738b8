use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Organizer,
    Usher,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Actions and screens gated by role
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewDashboard,
    ManageEvents,
    ManageGuests,
    ImportGuests,
    CheckInGuests,
    PrintBadges,
    ManageBadges,
    ViewReports,
    OnsiteRegistration,
    ManageApprovals,
    ViewAnalytics,
    ManageVendors,
    ManageSettings,
    ManageUsers,
}

impl Capability {
    /// Capabilities reserved for administrators
    pub fn is_admin_only(&self) -> bool {
        matches!(
            self,
            Capability::ManageApprovals
                | Capability::ViewAnalytics
                | Capability::ManageVendors
                | Capability::ManageSettings
                | Capability::ManageUsers
        )
    }
}

impl UserRole {
    pub fn grants(&self, capability: Capability) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Organizer | UserRole::Usher => !capability.is_admin_only(),
        }
    }
}

pub fn has_capability(user: &User, capability: Capability) -> bool {
    user.role.grants(capability)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: "1".to_string(),
            name: "Test".to_string(),
            email: "test@eventpro.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_admin_holds_everything() {
        let admin = user(UserRole::Admin);
        assert!(has_capability(&admin, Capability::ManageUsers));
        assert!(has_capability(&admin, Capability::ImportGuests));
    }

    #[test]
    fn test_general_roles_exclude_admin_screens() {
        for role in [UserRole::Organizer, UserRole::Usher] {
            let u = user(role);
            assert!(has_capability(&u, Capability::ImportGuests));
            assert!(has_capability(&u, Capability::CheckInGuests));
            assert!(!has_capability(&u, Capability::ManageVendors));
            assert!(!has_capability(&u, Capability::ViewAnalytics));
        }
    }
}

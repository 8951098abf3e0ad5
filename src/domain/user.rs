//! User domain model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a user row
pub type UserId = i64;

/// A member of staff acting on the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    pub status: UserStatus,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            status: UserStatus::Active,
        }
    }

    /// Whether the user holds the bypass role
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// The single role tag a user carries.
///
/// Tags are matched with exact, case-sensitive equality. Anything that is not
/// a known tag is kept verbatim in [`Role::Other`] and resolves to no
/// permissions unless the catalog has a role with that exact name. An
/// `Other` role is only built through `From`, so it never holds a known tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Pastor,
    Usher,
    Finance,
    PrFollowUp,
    DepartmentLeader,
    Member,
    Other(CustomRole),
}

/// A role tag outside the known set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomRole(String);

impl CustomRole {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Pastor => "pastor",
            Role::Usher => "usher",
            Role::Finance => "finance",
            Role::PrFollowUp => "pr_follow_up",
            Role::DepartmentLeader => "department_leader",
            Role::Member => "member",
            Role::Other(custom) => custom.as_str(),
        }
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        match tag {
            "admin" => Role::Admin,
            "pastor" => Role::Pastor,
            "usher" => Role::Usher,
            "finance" => Role::Finance,
            "pr_follow_up" => Role::PrFollowUp,
            "department_leader" => Role::DepartmentLeader,
            "member" => Role::Member,
            other => Role::Other(CustomRole(other.to_string())),
        }
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        match Role::from(tag.as_str()) {
            Role::Other(_) => Role::Other(CustomRole(tag)),
            known => known,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(custom) => custom.0,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_known_tags() {
        for tag in [
            "admin",
            "pastor",
            "usher",
            "finance",
            "pr_follow_up",
            "department_leader",
            "member",
        ] {
            let role = Role::from(tag);
            assert!(!matches!(role, Role::Other(_)), "{tag} should be known");
            assert_eq!(role.as_str(), tag);
        }
    }

    #[test]
    fn test_role_is_case_sensitive() {
        assert!(matches!(Role::from("Admin"), Role::Other(ref c) if c.as_str() == "Admin"));
        assert_eq!(Role::from("ADMIN").as_str(), "ADMIN");
    }

    #[test]
    fn test_known_tag_never_becomes_custom() {
        assert_eq!(Role::from("admin".to_string()), Role::Admin);
        assert_eq!(Role::from("member".to_string()), Role::Member);

        let custom = Role::from("admin ".to_string());
        assert!(matches!(custom, Role::Other(_)));
        assert_eq!(custom.as_str(), "admin ");
        assert_ne!(custom, Role::Admin);
    }

    #[test]
    fn test_user_is_admin() {
        assert!(User::new(1, "Grace", "admin").is_admin());
        assert!(!User::new(2, "Paul", "pastor").is_admin());
        assert!(!User::new(3, "Eve", "Admin").is_admin());
    }

    #[test]
    fn test_user_serde_uses_plain_tags() {
        let user = User::new(7, "Ruth", Role::PrFollowUp);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "pr_follow_up");
        assert_eq!(json["status"], "active");

        let parsed: User = serde_json::from_value(serde_json::json!({
            "id": 8,
            "name": "Silas",
            "role": "choir_master",
            "status": "inactive"
        }))
        .unwrap();
        assert!(matches!(parsed.role, Role::Other(ref c) if c.as_str() == "choir_master"));
        assert!(!parsed.is_active());
    }
}

//! RBAC domain models

use serde::{Deserialize, Serialize};

/// A role row and the permission names it grants, as read from storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    pub name: String,
    pub permissions: Vec<String>,
}

impl RoleGrant {
    pub fn new<I, S>(name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }
}

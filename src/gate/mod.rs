//! Gate: decides whether a user may exercise a named ability.

use crate::catalog::PermissionCatalog;
use crate::domain::User;
use crate::error::{AppError, Result};
use std::sync::Arc;

/// Evaluates abilities against one catalog snapshot.
///
/// Cloning is cheap; every clone reads the same snapshot.
#[derive(Debug, Clone)]
pub struct Gate {
    catalog: Arc<PermissionCatalog>,
}

impl Gate {
    pub fn new(catalog: Arc<PermissionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    /// Whether `user` may exercise `ability`.
    ///
    /// Admin is allowed everything, registered or not. Anyone else needs the
    /// ability to be registered and granted to their role.
    pub fn allows(&self, user: &User, ability: &str) -> bool {
        if user.is_admin() {
            return true;
        }

        if !self.catalog.is_registered(ability) {
            return false;
        }

        self.catalog.grants(user.role.as_str(), ability)
    }

    pub fn denies(&self, user: &User, ability: &str) -> bool {
        !self.allows(user, ability)
    }

    /// True if at least one of `abilities` is allowed. Empty input is false.
    pub fn any<S: AsRef<str>>(&self, user: &User, abilities: &[S]) -> bool {
        abilities
            .iter()
            .any(|ability| self.allows(user, ability.as_ref()))
    }

    /// `Err(Forbidden)` unless `ability` is allowed
    pub fn authorize(&self, user: &User, ability: &str) -> Result<()> {
        if self.allows(user, ability) {
            Ok(())
        } else {
            Err(AppError::MissingPermission {
                required: vec![ability.to_string()],
            })
        }
    }
}

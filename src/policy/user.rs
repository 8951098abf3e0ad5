//! Staff accounts as the target of administration.

use super::ResourcePolicy;
use crate::domain::ability::*;
use crate::domain::User;
use crate::gate::Gate;

#[derive(Debug, Clone, Copy)]
pub struct UserPolicy<'a> {
    gate: &'a Gate,
}

impl<'a> UserPolicy<'a> {
    pub fn new(gate: &'a Gate) -> Self {
        Self { gate }
    }

    /// Never on oneself, not even for admin.
    pub fn deactivate(&self, user: &User, target: &User) -> bool {
        if user.id == target.id {
            return false;
        }
        self.gate.allows(user, USERS_DEACTIVATE)
    }

    pub fn reactivate(&self, user: &User, _target: &User) -> bool {
        self.gate.allows(user, USERS_REACTIVATE)
    }
}

impl ResourcePolicy for UserPolicy<'_> {
    type Resource = User;

    fn view_any(&self, user: &User) -> bool {
        self.gate.allows(user, USERS_VIEW)
    }

    /// Everyone can read their own profile.
    fn view(&self, user: &User, target: &User) -> bool {
        user.id == target.id || self.gate.allows(user, USERS_VIEW)
    }

    fn create(&self, user: &User) -> bool {
        self.gate.allows(user, USERS_CREATE)
    }

    fn update(&self, user: &User, _target: &User) -> bool {
        self.gate.allows(user, USERS_UPDATE)
    }

    /// Never on oneself, not even for admin.
    fn delete(&self, user: &User, target: &User) -> bool {
        if user.id == target.id {
            return false;
        }
        self.gate.allows(user, USERS_DELETE)
    }
}

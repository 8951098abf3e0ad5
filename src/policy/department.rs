//! Ministries and their membership.

use super::ResourcePolicy;
use crate::domain::ability::*;
use crate::domain::{Department, User};
use crate::gate::Gate;

#[derive(Debug, Clone, Copy)]
pub struct DepartmentPolicy<'a> {
    gate: &'a Gate,
}

impl<'a> DepartmentPolicy<'a> {
    pub fn new(gate: &'a Gate) -> Self {
        Self { gate }
    }

    /// Leading a department grants nothing on its own; only the ability does.
    pub fn manage_members(&self, user: &User, _department: &Department) -> bool {
        self.gate.allows(user, DEPARTMENTS_MANAGE_MEMBERS)
    }
}

impl ResourcePolicy for DepartmentPolicy<'_> {
    type Resource = Department;

    fn view_any(&self, user: &User) -> bool {
        self.gate.allows(user, DEPARTMENTS_VIEW)
    }

    fn view(&self, user: &User, _department: &Department) -> bool {
        self.gate.allows(user, DEPARTMENTS_VIEW)
    }

    fn create(&self, user: &User) -> bool {
        self.gate.allows(user, DEPARTMENTS_CREATE)
    }

    fn update(&self, user: &User, _department: &Department) -> bool {
        self.gate.allows(user, DEPARTMENTS_UPDATE)
    }

    fn delete(&self, user: &User, _department: &Department) -> bool {
        self.gate.allows(user, DEPARTMENTS_DELETE)
    }
}

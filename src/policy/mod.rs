//! Record-level authorization layered on the gate.
//!
//! Each policy borrows a [`Gate`] and answers predicates for one record
//! type. Most predicates are a single gate check; the exceptions are
//! documented on the method. Refinements only narrow what the gate allows,
//! with one widening for reads: owners may always view their own record.

pub mod attendance;
pub mod broadcast;
pub mod contribution;
pub mod department;
pub mod expense;
pub mod user;
pub mod visitor;

pub use attendance::AttendancePolicy;
pub use broadcast::BroadcastPolicy;
pub use contribution::ContributionPolicy;
pub use department::DepartmentPolicy;
pub use expense::ExpensePolicy;
pub use user::UserPolicy;
pub use visitor::VisitorPolicy;

use crate::domain::User;
use crate::error::{AppError, Result};
use crate::gate::Gate;

/// The predicates every guarded record type answers
pub trait ResourcePolicy {
    type Resource;

    fn view_any(&self, user: &User) -> bool;
    fn view(&self, user: &User, resource: &Self::Resource) -> bool;
    fn create(&self, user: &User) -> bool;
    fn update(&self, user: &User, resource: &Self::Resource) -> bool;
    fn delete(&self, user: &User, resource: &Self::Resource) -> bool;
}

/// Turn a predicate result into `Err(Forbidden)` for `?` in handlers
pub fn authorize(allowed: bool, message: &str) -> Result<()> {
    if allowed {
        Ok(())
    } else {
        Err(AppError::Forbidden(message.to_string()))
    }
}

/// Policies for every record type, bound to one gate
#[derive(Debug, Clone, Copy)]
pub struct Policies<'a> {
    gate: &'a Gate,
}

impl<'a> Policies<'a> {
    pub fn new(gate: &'a Gate) -> Self {
        Self { gate }
    }

    pub fn attendance(&self) -> AttendancePolicy<'a> {
        AttendancePolicy::new(self.gate)
    }

    pub fn broadcast(&self) -> BroadcastPolicy<'a> {
        BroadcastPolicy::new(self.gate)
    }

    pub fn contribution(&self) -> ContributionPolicy<'a> {
        ContributionPolicy::new(self.gate)
    }

    pub fn department(&self) -> DepartmentPolicy<'a> {
        DepartmentPolicy::new(self.gate)
    }

    pub fn expense(&self) -> ExpensePolicy<'a> {
        ExpensePolicy::new(self.gate)
    }

    pub fn user(&self) -> UserPolicy<'a> {
        UserPolicy::new(self.gate)
    }

    pub fn visitor(&self) -> VisitorPolicy<'a> {
        VisitorPolicy::new(self.gate)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_authorize_maps_to_forbidden() {
        assert!(authorize(true, "unused").is_ok());

        let err = authorize(false, "Only the submitter may edit").unwrap_err();
        assert!(matches!(err, AppError::Forbidden(ref msg) if msg == "Only the submitter may edit"));
    }

    #[test]
    fn test_policies_share_gate() {
        let gate = default_gate();
        let policies = Policies::new(&gate);
        let usher = user(4, "usher");

        assert!(policies.attendance().create(&usher));
        assert!(!policies.contribution().create(&usher));
        assert!(policies.visitor().create(&usher));
    }
}

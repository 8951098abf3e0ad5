//! Tithes, offerings and pledges recorded by the finance team.

use super::ResourcePolicy;
use crate::domain::ability::*;
use crate::domain::{Contribution, Role, User};
use crate::gate::Gate;

#[derive(Debug, Clone, Copy)]
pub struct ContributionPolicy<'a> {
    gate: &'a Gate,
}

impl<'a> ContributionPolicy<'a> {
    pub fn new(gate: &'a Gate) -> Self {
        Self { gate }
    }

    pub fn approve(&self, user: &User) -> bool {
        self.gate.allows(user, CONTRIBUTIONS_APPROVE)
    }

    pub fn reject(&self, user: &User) -> bool {
        self.gate.allows(user, CONTRIBUTIONS_REJECT)
    }

    pub fn export(&self, user: &User) -> bool {
        self.gate.allows(user, CONTRIBUTIONS_EXPORT)
    }
}

impl ResourcePolicy for ContributionPolicy<'_> {
    type Resource = Contribution;

    fn view_any(&self, user: &User) -> bool {
        self.gate.allows(user, CONTRIBUTIONS_VIEW)
    }

    fn view(&self, user: &User, _contribution: &Contribution) -> bool {
        self.gate.allows(user, CONTRIBUTIONS_VIEW)
    }

    fn create(&self, user: &User) -> bool {
        self.gate.allows(user, CONTRIBUTIONS_CREATE)
    }

    /// Pending contributions only, checked against the create ability.
    fn update(&self, user: &User, contribution: &Contribution) -> bool {
        contribution.status.is_pending() && self.gate.allows(user, CONTRIBUTIONS_CREATE)
    }

    /// Financial records are removed by admin only, whatever the catalog says.
    fn delete(&self, user: &User, _contribution: &Contribution) -> bool {
        user.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordStatus;
    use crate::policy::test_support::*;
    use rstest::rstest;

    fn contribution(status: RecordStatus) -> Contribution {
        Contribution {
            id: 7,
            recorded_by: 11,
            status,
        }
    }

    #[rstest]
    #[case("admin", true)]
    #[case("finance", false)]
    #[case("pastor", false)]
    #[case("Admin", false)]
    fn test_delete_is_admin_only(#[case] role: &str, #[case] expected: bool) {
        let gate = default_gate();
        let policy = ContributionPolicy::new(&gate);

        assert_eq!(
            policy.delete(&user(11, role), &contribution(RecordStatus::Pending)),
            expected
        );
    }

    #[test]
    fn test_delete_ignores_catalog_grant() {
        let gate = gate_granting("finance", &["contributions.delete"]);
        let policy = ContributionPolicy::new(&gate);

        assert!(!policy.delete(&user(11, "finance"), &contribution(RecordStatus::Pending)));
    }

    #[test]
    fn test_update_only_while_pending() {
        let gate = default_gate();
        let policy = ContributionPolicy::new(&gate);
        let finance = user(11, "finance");

        assert!(policy.update(&finance, &contribution(RecordStatus::Pending)));
        assert!(!policy.update(&finance, &contribution(RecordStatus::Approved)));
        assert!(!policy.update(&user(2, "pastor"), &contribution(RecordStatus::Pending)));
    }

    #[test]
    fn test_finance_workflow() {
        let gate = default_gate();
        let policy = ContributionPolicy::new(&gate);
        let finance = user(11, "finance");
        let usher = user(5, "usher");

        assert!(policy.view_any(&finance));
        assert!(policy.approve(&finance));
        assert!(policy.reject(&finance));
        assert!(policy.export(&finance));
        assert!(!policy.view_any(&usher));
        assert!(!policy.export(&usher));
    }
}

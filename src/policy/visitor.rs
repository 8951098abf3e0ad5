//! First-time guests and their follow-up.

use super::ResourcePolicy;
use crate::domain::ability::*;
use crate::domain::{Role, User, Visitor};
use crate::gate::Gate;

#[derive(Debug, Clone, Copy)]
pub struct VisitorPolicy<'a> {
    gate: &'a Gate,
}

impl<'a> VisitorPolicy<'a> {
    pub fn new(gate: &'a Gate) -> Self {
        Self { gate }
    }

    pub fn follow_up(&self, user: &User, _visitor: &Visitor) -> bool {
        self.gate.allows(user, VISITORS_FOLLOW_UP)
    }

    pub fn export(&self, user: &User) -> bool {
        self.gate.allows(user, VISITORS_EXPORT)
    }
}

impl ResourcePolicy for VisitorPolicy<'_> {
    type Resource = Visitor;

    fn view_any(&self, user: &User) -> bool {
        self.gate.allows(user, VISITORS_VIEW)
    }

    fn view(&self, user: &User, _visitor: &Visitor) -> bool {
        self.gate.allows(user, VISITORS_VIEW)
    }

    fn create(&self, user: &User) -> bool {
        self.gate.allows(user, VISITORS_CREATE)
    }

    fn update(&self, user: &User, _visitor: &Visitor) -> bool {
        self.gate.allows(user, VISITORS_UPDATE)
    }

    /// Admin only, whatever the catalog says.
    fn delete(&self, user: &User, _visitor: &Visitor) -> bool {
        user.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PermissionCatalog;
    use crate::domain::RoleGrant;
    use crate::policy::test_support::*;
    use rstest::rstest;
    use std::sync::Arc;

    fn visitor() -> Visitor {
        Visitor {
            id: 3,
            assigned_to: Some(6),
        }
    }

    #[rstest]
    #[case("admin", true)]
    #[case("pr_follow_up", false)]
    #[case("pastor", false)]
    #[case("Admin", false)]
    fn test_delete_is_admin_only(#[case] role: &str, #[case] expected: bool) {
        let gate = default_gate();
        let policy = VisitorPolicy::new(&gate);

        assert_eq!(policy.delete(&user(6, role), &visitor()), expected);
    }

    #[test]
    fn test_delete_ignores_catalog_grant() {
        let catalog = PermissionCatalog::new(
            ["visitors.view", "visitors.delete"],
            vec![RoleGrant::new(
                "pr_follow_up",
                ["visitors.view", "visitors.delete"],
            )],
        );
        let gate = Gate::new(Arc::new(catalog));
        let policy = VisitorPolicy::new(&gate);
        let pr = user(6, "pr_follow_up");

        assert!(gate.allows(&pr, "visitors.delete"));
        assert!(!policy.delete(&pr, &visitor()));
    }

    #[test]
    fn test_follow_up_team() {
        let gate = default_gate();
        let policy = VisitorPolicy::new(&gate);
        let pr = user(6, "pr_follow_up");
        let usher = user(5, "usher");

        assert!(policy.follow_up(&pr, &visitor()));
        assert!(policy.update(&pr, &visitor()));
        assert!(!policy.export(&pr));

        assert!(policy.create(&usher));
        assert!(policy.view(&usher, &visitor()));
        assert!(!policy.follow_up(&usher, &visitor()));
        assert!(!policy.update(&usher, &visitor()));
    }

    #[test]
    fn test_pastor_exports() {
        let gate = default_gate();
        let policy = VisitorPolicy::new(&gate);

        assert!(policy.export(&user(2, "pastor")));
        assert!(policy.view_any(&user(2, "pastor")));
        assert!(!policy.view_any(&user(9, "member")));
    }
}

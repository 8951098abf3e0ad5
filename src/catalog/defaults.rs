//! Built-in role matrix of a fresh install.
//!
//! Mirrors the rows seeded into the permission tables, so the catalog can be
//! evaluated without a database.

use super::PermissionCatalog;
use crate::domain::ability::*;
use crate::domain::RoleGrant;

/// `(role, abilities)` pairs. `admin` is listed for completeness; the gate
/// bypasses it anyway.
pub const ROLE_MATRIX: &[(&str, &[&str])] = &[
    ("admin", ALL),
    (
        "pastor",
        &[
            ATTENDANCE_VIEW,
            ATTENDANCE_APPROVE,
            ATTENDANCE_REJECT,
            ATTENDANCE_EXPORT,
            BROADCASTS_VIEW,
            BROADCASTS_CREATE,
            BROADCASTS_APPROVE,
            BROADCASTS_REJECT,
            CONTRIBUTIONS_VIEW,
            CONTRIBUTIONS_EXPORT,
            EXPENSES_VIEW,
            VISITORS_VIEW,
            VISITORS_CREATE,
            VISITORS_UPDATE,
            VISITORS_FOLLOW_UP,
            VISITORS_EXPORT,
            DEPARTMENTS_VIEW,
            USERS_VIEW,
        ],
    ),
    (
        "usher",
        &[
            ATTENDANCE_VIEW,
            ATTENDANCE_CREATE,
            VISITORS_VIEW,
            VISITORS_CREATE,
        ],
    ),
    (
        "finance",
        &[
            CONTRIBUTIONS_VIEW,
            CONTRIBUTIONS_CREATE,
            CONTRIBUTIONS_APPROVE,
            CONTRIBUTIONS_REJECT,
            CONTRIBUTIONS_EXPORT,
            EXPENSES_VIEW,
            EXPENSES_CREATE,
            EXPENSES_UPDATE,
            EXPENSES_APPROVE,
        ],
    ),
    (
        "pr_follow_up",
        &[
            VISITORS_VIEW,
            VISITORS_CREATE,
            VISITORS_UPDATE,
            VISITORS_FOLLOW_UP,
            BROADCASTS_VIEW,
            BROADCASTS_CREATE,
        ],
    ),
    (
        "department_leader",
        &[
            ATTENDANCE_VIEW,
            ATTENDANCE_CREATE,
            BROADCASTS_VIEW,
            BROADCASTS_CREATE,
            DEPARTMENTS_VIEW,
            DEPARTMENTS_MANAGE_MEMBERS,
        ],
    ),
    ("member", &[BROADCASTS_VIEW]),
];

/// The default role grants
pub fn default_grants() -> Vec<RoleGrant> {
    ROLE_MATRIX
        .iter()
        .map(|(role, abilities)| RoleGrant::new(*role, abilities.iter().copied()))
        .collect()
}

/// A snapshot of the default catalog
pub fn default_catalog() -> PermissionCatalog {
    PermissionCatalog::new(ALL.iter().copied(), default_grants())
}

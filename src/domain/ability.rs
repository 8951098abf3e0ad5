//! Ability names checked by the gate.
//!
//! Abilities are flat `<resource>.<action>` strings compared with exact
//! equality. Policies refer to these constants rather than literals.

// Attendance
pub const ATTENDANCE_VIEW: &str = "attendance.view";
pub const ATTENDANCE_CREATE: &str = "attendance.create";
pub const ATTENDANCE_APPROVE: &str = "attendance.approve";
pub const ATTENDANCE_REJECT: &str = "attendance.reject";
pub const ATTENDANCE_DELETE: &str = "attendance.delete";
pub const ATTENDANCE_EXPORT: &str = "attendance.export";

// Broadcasts
pub const BROADCASTS_VIEW: &str = "broadcasts.view";
pub const BROADCASTS_CREATE: &str = "broadcasts.create";
pub const BROADCASTS_APPROVE: &str = "broadcasts.approve";
pub const BROADCASTS_REJECT: &str = "broadcasts.reject";
pub const BROADCASTS_DELETE: &str = "broadcasts.delete";

// Contributions
pub const CONTRIBUTIONS_VIEW: &str = "contributions.view";
pub const CONTRIBUTIONS_CREATE: &str = "contributions.create";
pub const CONTRIBUTIONS_APPROVE: &str = "contributions.approve";
pub const CONTRIBUTIONS_REJECT: &str = "contributions.reject";
pub const CONTRIBUTIONS_EXPORT: &str = "contributions.export";

// Expenses
pub const EXPENSES_VIEW: &str = "expenses.view";
pub const EXPENSES_CREATE: &str = "expenses.create";
pub const EXPENSES_UPDATE: &str = "expenses.update";
pub const EXPENSES_DELETE: &str = "expenses.delete";
pub const EXPENSES_APPROVE: &str = "expenses.approve";

// Visitors
pub const VISITORS_VIEW: &str = "visitors.view";
pub const VISITORS_CREATE: &str = "visitors.create";
pub const VISITORS_UPDATE: &str = "visitors.update";
pub const VISITORS_FOLLOW_UP: &str = "visitors.follow_up";
pub const VISITORS_EXPORT: &str = "visitors.export";

// Departments
pub const DEPARTMENTS_VIEW: &str = "departments.view";
pub const DEPARTMENTS_CREATE: &str = "departments.create";
pub const DEPARTMENTS_UPDATE: &str = "departments.update";
pub const DEPARTMENTS_DELETE: &str = "departments.delete";
pub const DEPARTMENTS_MANAGE_MEMBERS: &str = "departments.manage_members";

// Users
pub const USERS_VIEW: &str = "users.view";
pub const USERS_CREATE: &str = "users.create";
pub const USERS_UPDATE: &str = "users.update";
pub const USERS_DELETE: &str = "users.delete";
pub const USERS_DEACTIVATE: &str = "users.deactivate";
pub const USERS_REACTIVATE: &str = "users.reactivate";

/// Every ability above, in declaration order
pub const ALL: &[&str] = &[
    ATTENDANCE_VIEW,
    ATTENDANCE_CREATE,
    ATTENDANCE_APPROVE,
    ATTENDANCE_REJECT,
    ATTENDANCE_DELETE,
    ATTENDANCE_EXPORT,
    BROADCASTS_VIEW,
    BROADCASTS_CREATE,
    BROADCASTS_APPROVE,
    BROADCASTS_REJECT,
    BROADCASTS_DELETE,
    CONTRIBUTIONS_VIEW,
    CONTRIBUTIONS_CREATE,
    CONTRIBUTIONS_APPROVE,
    CONTRIBUTIONS_REJECT,
    CONTRIBUTIONS_EXPORT,
    EXPENSES_VIEW,
    EXPENSES_CREATE,
    EXPENSES_UPDATE,
    EXPENSES_DELETE,
    EXPENSES_APPROVE,
    VISITORS_VIEW,
    VISITORS_CREATE,
    VISITORS_UPDATE,
    VISITORS_FOLLOW_UP,
    VISITORS_EXPORT,
    DEPARTMENTS_VIEW,
    DEPARTMENTS_CREATE,
    DEPARTMENTS_UPDATE,
    DEPARTMENTS_DELETE,
    DEPARTMENTS_MANAGE_MEMBERS,
    USERS_VIEW,
    USERS_CREATE,
    USERS_UPDATE,
    USERS_DELETE,
    USERS_DEACTIVATE,
    USERS_REACTIVATE,
];

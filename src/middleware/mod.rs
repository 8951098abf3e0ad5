//! HTTP middleware for Flock Core
//!
//! - Permission enforcement for protected routes (401 / 403 / pass-through)

pub mod check_permission;

pub use check_permission::{
    check_permission, check_permission_middleware, PermissionDecision, RequirePermission,
};

//! Domain models for Flock Core

pub mod ability;
pub mod rbac;
pub mod record;
pub mod user;

pub use rbac::*;
pub use record::*;
pub use user::*;

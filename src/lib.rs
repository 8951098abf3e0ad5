//! Flock Core - authorization for the Flock church management backend
//!
//! This crate decides who may do what: a permission catalog loaded from
//! storage, a gate evaluating abilities against it, record policies layered
//! on the gate, and the axum middleware guarding routes.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod middleware;
pub mod policy;
pub mod repository;
pub mod telemetry;

// Re-export commonly used types
pub use catalog::{CatalogStore, PermissionCatalog};
pub use config::Config;
pub use error::{AppError, Result};
pub use gate::Gate;

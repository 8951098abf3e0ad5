//! Permission enforcement middleware for REST routes
//!
//! The authenticated [`User`] is expected in the request extensions, put
//! there by the authentication layer in front of this one. A request with no
//! user is rejected with 401 before any ability is evaluated. A request whose
//! user holds none of the route's abilities is rejected with 403, listing the
//! abilities that were checked.
//!
//! On success the [`Gate`] used for the decision is inserted into the request
//! extensions, so handlers evaluate policies against the same snapshot.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::counter;
use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::domain::User;
use crate::error::AppError;
use crate::gate::Gate;

/// Outcome of a route permission check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionDecision {
    Allow,
    Unauthenticated,
    /// The user holds none of `required`
    Forbidden { required: Vec<String> },
}

/// Decide a request: 401 when no user, 403 unless at least one of
/// `required` is allowed.
pub fn check_permission<S: AsRef<str>>(
    gate: &Gate,
    user: Option<&User>,
    required: &[S],
) -> PermissionDecision {
    let Some(user) = user else {
        return PermissionDecision::Unauthenticated;
    };

    if gate.any(user, required) {
        PermissionDecision::Allow
    } else {
        PermissionDecision::Forbidden {
            required: required.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }
}

/// Middleware state: where to read the catalog and which abilities a route
/// accepts
#[derive(Clone)]
pub struct RequirePermission {
    store: CatalogStore,
    abilities: Arc<[String]>,
}

impl RequirePermission {
    /// Accept the request if the user is allowed any one of `abilities`
    pub fn any<I, S>(store: CatalogStore, abilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            store,
            abilities: abilities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }
}

/// Permission enforcement middleware, for use with
/// `axum::middleware::from_fn_with_state`.
pub async fn check_permission_middleware(
    State(state): State<RequirePermission>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let gate = Gate::new(state.store.snapshot().await);

    let decision = check_permission(&gate, request.extensions().get::<User>(), state.abilities());

    match decision {
        PermissionDecision::Allow => {
            counter!("flock_permission_checks_total", "decision" => "allow").increment(1);
            request.extensions_mut().insert(gate);
            next.run(request).await
        }
        PermissionDecision::Unauthenticated => {
            counter!("flock_permission_checks_total", "decision" => "unauthenticated")
                .increment(1);
            AppError::Unauthorized("Authentication required".to_string()).into_response()
        }
        PermissionDecision::Forbidden { required } => {
            if let Some(user) = request.extensions().get::<User>() {
                tracing::warn!(
                    user_id = user.id,
                    role = %user.role,
                    required = ?required,
                    path = %request.uri().path(),
                    "Permission denied"
                );
            }
            counter!("flock_permission_checks_total", "decision" => "forbidden").increment(1);
            AppError::MissingPermission { required }.into_response()
        }
    }
}

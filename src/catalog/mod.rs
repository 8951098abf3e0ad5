//! Permission catalog: registered abilities and the role grants over them.
//!
//! A [`PermissionCatalog`] is an immutable snapshot. It is built once from
//! storage (see [`loader`]) and shared behind an `Arc` by the [`store`];
//! evaluation never mutates it.

pub mod defaults;
pub mod loader;
pub mod store;

pub use loader::{load_catalog, try_load_catalog};
pub use store::CatalogStore;

use crate::domain::RoleGrant;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    static ref NO_PERMISSIONS: HashSet<String> = HashSet::new();
}

/// Where a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    /// Built from storage or from an explicit grant table
    Loaded,
    /// Storage could not be read; nothing is registered
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    abilities: HashSet<String>,
    grants: HashMap<String, HashSet<String>>,
    state: CatalogState,
}

impl PermissionCatalog {
    /// Build a snapshot from the registered abilities and the role grants.
    ///
    /// A grant naming an ability that is not registered is dropped, so a
    /// role can only ever resolve to registered abilities. Grants for the
    /// same role name are merged.
    pub fn new<A, S, G>(abilities: A, grants: G) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
        G: IntoIterator<Item = RoleGrant>,
    {
        let abilities: HashSet<String> = abilities.into_iter().map(Into::into).collect();

        let mut resolved: HashMap<String, HashSet<String>> = HashMap::new();
        for grant in grants {
            let held = resolved.entry(grant.name).or_default();
            held.extend(
                grant
                    .permissions
                    .into_iter()
                    .filter(|permission| abilities.contains(permission)),
            );
        }

        Self {
            abilities,
            grants: resolved,
            state: CatalogState::Loaded,
        }
    }

    /// The snapshot used when storage is unreachable: no abilities, no grants.
    pub fn unavailable() -> Self {
        Self {
            abilities: HashSet::new(),
            grants: HashMap::new(),
            state: CatalogState::Unavailable,
        }
    }

    pub fn state(&self) -> CatalogState {
        self.state
    }

    pub fn is_available(&self) -> bool {
        self.state == CatalogState::Loaded
    }

    /// Whether `ability` exists in the catalog (exact match)
    pub fn is_registered(&self, ability: &str) -> bool {
        self.abilities.contains(ability)
    }

    /// Abilities granted to `role`. Unknown roles resolve to the empty set.
    pub fn resolve(&self, role: &str) -> &HashSet<String> {
        self.grants.get(role).unwrap_or(&*NO_PERMISSIONS)
    }

    /// Whether `role` is granted `ability`
    pub fn grants(&self, role: &str, ability: &str) -> bool {
        self.resolve(role).contains(ability)
    }

    /// Registered abilities, sorted
    pub fn abilities(&self) -> Vec<&str> {
        let mut abilities: Vec<&str> = self.abilities.iter().map(String::as_str).collect();
        abilities.sort_unstable();
        abilities
    }

    /// Role names with a grant entry, sorted
    pub fn role_names(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = self.grants.keys().map(String::as_str).collect();
        roles.sort_unstable();
        roles
    }
}

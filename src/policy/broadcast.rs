//! Announcements queued for approval before they go out.

use super::ResourcePolicy;
use crate::domain::ability::*;
use crate::domain::{Broadcast, User};
use crate::gate::Gate;

#[derive(Debug, Clone, Copy)]
pub struct BroadcastPolicy<'a> {
    gate: &'a Gate,
}

impl<'a> BroadcastPolicy<'a> {
    pub fn new(gate: &'a Gate) -> Self {
        Self { gate }
    }

    pub fn approve(&self, user: &User) -> bool {
        self.gate.allows(user, BROADCASTS_APPROVE)
    }

    pub fn reject(&self, user: &User) -> bool {
        self.gate.allows(user, BROADCASTS_REJECT)
    }
}

impl ResourcePolicy for BroadcastPolicy<'_> {
    type Resource = Broadcast;

    fn view_any(&self, user: &User) -> bool {
        self.gate.allows(user, BROADCASTS_VIEW)
    }

    fn view(&self, user: &User, _broadcast: &Broadcast) -> bool {
        self.gate.allows(user, BROADCASTS_VIEW)
    }

    fn create(&self, user: &User) -> bool {
        self.gate.allows(user, BROADCASTS_CREATE)
    }

    /// Pending broadcasts only, checked against the create ability.
    fn update(&self, user: &User, broadcast: &Broadcast) -> bool {
        broadcast.status.is_pending() && self.gate.allows(user, BROADCASTS_CREATE)
    }

    fn delete(&self, user: &User, _broadcast: &Broadcast) -> bool {
        self.gate.allows(user, BROADCASTS_DELETE)
    }
}

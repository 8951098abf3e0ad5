//! Church expenses recorded by the finance team.

use super::ResourcePolicy;
use crate::domain::ability::*;
use crate::domain::{Expense, User};
use crate::gate::Gate;

#[derive(Debug, Clone, Copy)]
pub struct ExpensePolicy<'a> {
    gate: &'a Gate,
}

impl<'a> ExpensePolicy<'a> {
    pub fn new(gate: &'a Gate) -> Self {
        Self { gate }
    }

    pub fn approve(&self, user: &User) -> bool {
        self.gate.allows(user, EXPENSES_APPROVE)
    }
}

impl ResourcePolicy for ExpensePolicy<'_> {
    type Resource = Expense;

    fn view_any(&self, user: &User) -> bool {
        self.gate.allows(user, EXPENSES_VIEW)
    }

    fn view(&self, user: &User, _expense: &Expense) -> bool {
        self.gate.allows(user, EXPENSES_VIEW)
    }

    fn create(&self, user: &User) -> bool {
        self.gate.allows(user, EXPENSES_CREATE)
    }

    /// Approved or rejected expenses are closed.
    fn update(&self, user: &User, expense: &Expense) -> bool {
        expense.status.is_pending() && self.gate.allows(user, EXPENSES_UPDATE)
    }

    fn delete(&self, user: &User, _expense: &Expense) -> bool {
        self.gate.allows(user, EXPENSES_DELETE)
    }
}

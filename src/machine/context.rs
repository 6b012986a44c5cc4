//! Mutable data carried across one customer interaction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::input::InputEvent;

/// Credit and pending selection for the current transaction.
///
/// Only the state transitions in this module mutate it. Each reset starts a
/// new transaction with a fresh id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionContext {
    transaction: Uuid,
    amount: u32,
    selection: Option<InputEvent>,
}

impl Default for TransactionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionContext {
    pub fn new() -> Self {
        Self {
            transaction: Uuid::new_v4(),
            amount: 0,
            selection: None,
        }
    }

    /// Credit inserted so far, in cents.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// The committed selection, if any.
    pub fn selection(&self) -> Option<InputEvent> {
        self.selection
    }

    pub fn transaction(&self) -> Uuid {
        self.transaction
    }

    pub(crate) fn deposit(&mut self, cents: u32) {
        self.amount = self.amount.saturating_add(cents);
    }

    pub(crate) fn select(&mut self, item: InputEvent) {
        self.selection = Some(item);
    }

    pub(crate) fn debit(&mut self, cents: u32) {
        self.amount = self.amount.saturating_sub(cents);
    }

    /// Zero the credit, returning what was there.
    pub(crate) fn take_change(&mut self) -> u32 {
        std::mem::take(&mut self.amount)
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

//! Controller states and their transition rules.
//!
//! Stable states react to a categorized input through [`ControllerState::on_input`];
//! transient states fire [`ControllerState::advance`] exactly once per entry.
//! Both are exhaustive matches over the state, so adding a state means
//! deciding its behavior here.

use tracing::{debug, info, warn};

use super::context::TransactionContext;
use super::error::ControllerError;
use crate::input::{classify, InputCategory, InputEvent};
use crate::output::Notice;

crate::state_enum! {
    /// Where the machine is in a transaction.
    pub enum ControllerState {
        /// Idle, waiting for a customer.
        Resting,
        /// Collecting money; waiting for more money or a selection.
        AddingMoney,
        /// Releasing the selected item.
        Dispensing,
        /// Returning leftover credit.
        GivingChange,
        /// Shut down.
        Terminal,
    }
    final: [Terminal]
    transient: [Dispensing, GivingChange]
}

/// Result of a transition that was taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reaction {
    pub to: ControllerState,
    pub notice: Option<Notice>,
}

impl Reaction {
    fn enter(state: ControllerState) -> Self {
        Self {
            to: state,
            notice: None,
        }
    }

    fn with_notice(state: ControllerState, notice: Notice) -> Self {
        Self {
            to: state,
            notice: Some(notice),
        }
    }
}

impl ControllerState {
    /// Input-taking transition of a stable state.
    ///
    /// The rule is chosen by the event's own category. Returns `Ok(None)`
    /// when the state has no rule for that category; the input is then
    /// ignored and nothing changes.
    pub fn on_input(
        self,
        event: InputEvent,
        ctx: &mut TransactionContext,
    ) -> Result<Option<Reaction>, ControllerError> {
        let reaction = match (self, classify(event)) {
            (Self::Resting, InputCategory::Money) => {
                ctx.deposit(event.value());
                Some(Reaction::enter(Self::AddingMoney))
            }

            (Self::AddingMoney, InputCategory::Money) => {
                ctx.deposit(event.value());
                Some(Reaction::enter(Self::AddingMoney))
            }
            (Self::AddingMoney, InputCategory::ItemSelection) => {
                let price = event.value();
                if ctx.amount() < price {
                    warn!(item = %event, price, amount = ctx.amount(), "insufficient funds");
                    Some(Reaction::with_notice(
                        Self::AddingMoney,
                        Notice::InsufficientFunds {
                            item: event,
                            price,
                            amount: ctx.amount(),
                        },
                    ))
                } else {
                    ctx.select(event);
                    Some(Reaction::enter(Self::Dispensing))
                }
            }
            (Self::AddingMoney, InputCategory::QuitTransaction) => {
                debug!(amount = ctx.amount(), "transaction aborted");
                Some(Reaction::enter(Self::GivingChange))
            }

            (Self::Resting | Self::AddingMoney, InputCategory::ShutDown) => {
                info!(amount = ctx.amount(), "shutting down");
                Some(Reaction::with_notice(Self::Terminal, Notice::Halted))
            }

            (Self::Resting | Self::AddingMoney, _) => None,

            (Self::Dispensing | Self::GivingChange, _) => {
                return Err(ControllerError::NotStable { state: self })
            }
            (Self::Terminal, _) => return Err(ControllerError::Halted),
        };
        Ok(reaction)
    }

    /// Zero-argument transition of a transient state.
    pub fn advance(self, ctx: &mut TransactionContext) -> Result<Reaction, ControllerError> {
        match self {
            Self::Dispensing => {
                let item = ctx
                    .selection()
                    .ok_or(ControllerError::MissingSelection { state: self })?;
                ctx.debit(item.value());
                info!(%item, transaction = %ctx.transaction(), "dispensed");
                Ok(Reaction::with_notice(
                    Self::GivingChange,
                    Notice::Dispensed { item },
                ))
            }
            Self::GivingChange => {
                let change = ctx.take_change();
                ctx.reset();
                Ok(match change {
                    0 => Reaction::enter(Self::Resting),
                    amount => Reaction::with_notice(Self::Resting, Notice::Change { amount }),
                })
            }
            Self::Resting | Self::AddingMoney => Err(ControllerError::NotTransient { state: self }),
            Self::Terminal => Err(ControllerError::Halted),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::input::InputEvent;

/// An observable effect of a transition, rendered on the display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The selection was released to the customer.
    Dispensed { item: InputEvent },

    /// Leftover credit returned at the end of a transaction.
    Change { amount: u32 },

    /// A selection costs more than the credit inserted so far.
    InsufficientFunds {
        item: InputEvent,
        price: u32,
        amount: u32,
    },

    /// The machine has shut down.
    Halted,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dispensed { item } => write!(f, "dispense {item}"),
            Self::Change { amount } => write!(f, "change: {amount}"),
            Self::InsufficientFunds {
                item,
                price,
                amount,
            } => write!(
                f,
                "insufficient funds for {item}: price {price}, inserted {amount}"
            ),
            Self::Halted => f.write_str("halted"),
        }
    }
}

//! The vending machine controller.
//!
//! - `ControllerState` holds the transition rules
//! - `TransactionContext` holds credit and the pending selection
//! - `Controller` owns both and drives the input loop

mod context;
mod controller;
mod error;
mod state;

pub use context::TransactionContext;
pub use controller::{Controller, Snapshot, DEFAULT_HISTORY_LIMIT};
pub use error::ControllerError;
pub use state::{ControllerState, Reaction};

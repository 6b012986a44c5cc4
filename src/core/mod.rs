//! Core state machine types.
//!
//! This module contains the pure, domain-agnostic part of the controller:
//! - State definitions via the `State` trait and the `state_enum!` macro
//! - Transition history, optionally bounded
//!
//! Nothing in here performs I/O.

mod history;
mod macros;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;

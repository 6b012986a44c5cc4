//! Contract violations of the state machine.

use thiserror::Error;

use super::state::ControllerState;

/// Misuse of the controller's transition contract.
///
/// None of these arise from bad input; they mean a transition was invoked
/// on a state that cannot take it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("state '{state}' is transient and cannot take input")]
    NotStable { state: ControllerState },

    #[error("state '{state}' is stable and cannot advance on its own")]
    NotTransient { state: ControllerState },

    #[error("entered '{state}' without a committed selection")]
    MissingSelection { state: ControllerState },

    #[error("controller has halted; no further transitions are possible")]
    Halted,
}

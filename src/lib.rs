//! Vendfsm: an event-driven vending machine controller
//!
//! The controller is a small finite-state machine. Stable states wait for an
//! input; transient states fire immediately and hand control back, so one
//! external input can cascade through several states before the controller
//! settles again.
//!
//! # Core Concepts
//!
//! - **Inputs**: a closed set of [`InputEvent`]s, each classified into an
//!   [`InputCategory`] by a compile-time table
//! - **States**: [`ControllerState`] holds every transition rule
//! - **Controller**: owns the transaction context and drives the loop
//! - **Sources and sinks**: where inputs come from and where notices go
//!
//! # Example
//!
//! ```rust
//! use vendfsm::input::ScriptedInput;
//! use vendfsm::machine::{Controller, ControllerState};
//! use vendfsm::output::RecordingSink;
//!
//! let mut source = ScriptedInput::parse("QUARTER; DOLLAR; SODA; STOP").unwrap();
//! let mut controller = Controller::new(RecordingSink::new());
//!
//! let processed = controller.run(&mut source).unwrap();
//!
//! assert_eq!(processed, 4);
//! assert_eq!(controller.state(), ControllerState::Terminal);
//! assert_eq!(
//!     controller.sink().lines(),
//!     vec!["dispense SODA", "change: 25", "halted"]
//! );
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod machine;
pub mod output;

// Re-export commonly used types
pub use crate::core::{State, StateHistory, StateTransition};
pub use error::{Error, Result};
pub use input::{classify, InputCategory, InputEvent, InputSource};
pub use machine::{Controller, ControllerError, ControllerState, TransactionContext};
pub use output::{Notice, OutputSink};

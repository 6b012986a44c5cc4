//! The driver that owns the machine's mutable state.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

use super::context::TransactionContext;
use super::error::ControllerError;
use super::state::{ControllerState, Reaction};
use crate::core::{State, StateHistory, StateTransition};
use crate::input::{classify, InputEvent, InputSource};
use crate::output::OutputSink;

/// Transitions a controller keeps unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Serializable view of a controller at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: ControllerState,
    pub transaction: Uuid,
    pub amount: u32,
    pub selection: Option<InputEvent>,
    pub steps: usize,
}

/// Event-driven vending machine controller.
///
/// Starts in [`ControllerState::Resting`]. Each [`step`](Controller::step)
/// consumes one external input, applies the current stable state's rule,
/// then runs any transient states to completion before returning.
///
/// Only the most recent transitions are kept in [`history`](Controller::history),
/// so an unbounded input stream runs in constant memory.
///
/// # Example
///
/// ```rust
/// use vendfsm::input::InputEvent;
/// use vendfsm::machine::{Controller, ControllerState};
/// use vendfsm::output::RecordingSink;
///
/// let mut controller = Controller::new(RecordingSink::new());
/// controller.step(InputEvent::Quarter).unwrap();
/// controller.step(InputEvent::Dollar).unwrap();
/// let state = controller.step(InputEvent::Soda).unwrap();
///
/// assert_eq!(state, ControllerState::Resting);
/// assert_eq!(controller.sink().lines(), vec!["dispense SODA", "change: 25"]);
/// ```
#[derive(Debug)]
pub struct Controller<O: OutputSink> {
    state: ControllerState,
    context: TransactionContext,
    history: StateHistory<ControllerState>,
    sink: O,
    steps: usize,
}

impl<O: OutputSink> Controller<O> {
    pub fn new(sink: O) -> Self {
        Self::with_history_limit(sink, DEFAULT_HISTORY_LIMIT)
    }

    /// Keep at most `limit` transitions; `0` disables recording.
    pub fn with_history_limit(sink: O, limit: usize) -> Self {
        Self {
            state: ControllerState::Resting,
            context: TransactionContext::new(),
            history: StateHistory::bounded(limit),
            sink,
            steps: 0,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn context(&self) -> &TransactionContext {
        &self.context
    }

    pub fn history(&self) -> &StateHistory<ControllerState> {
        &self.history
    }

    pub fn sink(&self) -> &O {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut O {
        &mut self.sink
    }

    pub fn into_sink(self) -> O {
        self.sink
    }

    /// External inputs processed so far, including ignored ones.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_halted(&self) -> bool {
        self.state.is_final()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            transaction: self.context.transaction(),
            amount: self.context.amount(),
            selection: self.context.selection(),
            steps: self.steps,
        }
    }

    /// Process one external input and settle in a stable or final state.
    ///
    /// Inputs the current state has no rule for are ignored. Stepping a
    /// halted controller is an error.
    pub fn step(&mut self, event: InputEvent) -> Result<ControllerState, ControllerError> {
        if self.is_halted() {
            return Err(ControllerError::Halted);
        }
        self.steps += 1;

        match self.state.on_input(event, &mut self.context)? {
            Some(reaction) => self.apply(reaction),
            None => {
                trace!(state = %self.state, %event, category = %classify(event), "input ignored");
                return Ok(self.state);
            }
        }

        while self.state.is_transient() {
            let reaction = self.state.advance(&mut self.context)?;
            self.apply(reaction);
        }

        debug!(
            step = self.steps,
            %event,
            state = %self.state,
            amount = self.context.amount(),
            "step settled"
        );
        Ok(self.state)
    }

    /// Drive the controller from `source` until it halts.
    ///
    /// Returns the number of inputs processed.
    pub fn run<I>(&mut self, source: &mut I) -> Result<usize, ControllerError>
    where
        I: InputSource + ?Sized,
    {
        let start = self.steps;
        while !self.is_halted() {
            let event = source.next_event();
            self.step(event)?;
        }
        Ok(self.steps - start)
    }

    fn apply(&mut self, reaction: Reaction) {
        let Reaction { to, notice } = reaction;
        trace!(from = %self.state, %to, "transition");
        self.history = std::mem::take(&mut self.history).record(StateTransition {
            from: self.state,
            to,
            timestamp: Utc::now(),
            step: self.steps,
        });
        if let Some(notice) = notice {
            self.sink.emit(&notice);
        }
        self.state = to;
    }
}

//! State transition history tracking.
//!
//! Keeps an in-memory, optionally bounded record of the state changes the
//! controller makes. Nothing here is persisted.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use vendfsm::core::StateTransition;
/// use vendfsm::machine::ControllerState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ControllerState::Resting,
///     to: ControllerState::AddingMoney,
///     timestamp: Utc::now(),
///     step: 1,
/// };
/// assert!(!transition.is_self_loop());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// The external step that caused this transition.
    ///
    /// A cascade through transient states shares one step number.
    pub step: usize,
}

impl<S: State> StateTransition<S> {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of state transitions.
///
/// `record` consumes the history and hands back the extended one, so a
/// history value is never observed half-updated. A bounded history keeps
/// only the most recent `limit` transitions.
///
/// # Example
///
/// ```rust
/// use vendfsm::core::{StateHistory, StateTransition};
/// use vendfsm::machine::ControllerState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: ControllerState::Resting,
///         to: ControllerState::AddingMoney,
///         timestamp: Utc::now(),
///         step: 1,
///     })
///     .record(StateTransition {
///         from: ControllerState::AddingMoney,
///         to: ControllerState::Terminal,
///         timestamp: Utc::now(),
///         step: 2,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &ControllerState::Terminal);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` transitions, dropping
    /// the oldest first.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push_back(transition);
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the oldest retained `from` state followed by the `to` state
    /// of each transition, in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Transitions caused by a single external step, in cascade order.
    pub fn for_step(&self, step: usize) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter().filter(move |t| t.step == step)
    }

    /// Total duration from first to last retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All retained transitions, oldest first.
    pub fn transitions(
        &self,
    ) -> impl DoubleEndedIterator<Item = &StateTransition<S>> + ExactSizeIterator {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

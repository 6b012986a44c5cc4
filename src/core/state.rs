//! Core State trait for controller states.
//!
//! Every controller state implements this trait, which exposes pure
//! queries the driver loop uses to decide how to advance.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state is either *stable* (it waits for an
/// external input) or *transient* (it fires once, immediately, without
/// consuming input). Final states accept nothing at all.
///
/// # Required Traits
///
/// - `Copy`: States are small tags recorded in history by value
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States appear in controller snapshots
///
/// # Example
///
/// ```rust
/// use vendfsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Closed,
///     Opening,
///     Open,
///     Jammed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opening => "Opening",
///             Self::Open => "Open",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
///
///     fn is_transient(&self) -> bool {
///         matches!(self, Self::Opening)
///     }
/// }
///
/// assert!(Door::Closed.is_stable());
/// assert!(!Door::Opening.is_stable());
/// assert!(!Door::Jammed.is_stable());
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (absorbing) state.
    ///
    /// Final states have no outgoing transitions.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this state fires automatically without external input.
    ///
    /// Default implementation returns `false`.
    fn is_transient(&self) -> bool {
        false
    }

    /// A stable state waits for the next external input.
    fn is_stable(&self) -> bool {
        !self.is_final() && !self.is_transient()
    }
}

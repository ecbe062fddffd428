//! Transition history tracking.
//!
//! Records every step a machine takes, in order, with a timestamp.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied event.
///
/// # Example
///
/// ```rust
/// use statetable::core::StateTransition;
/// use statetable::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Task {
///         Pending = 0,
///         Running = 1,
///     }
/// }
///
/// event_enum! {
///     enum Signal {
///         Start = 0,
///     }
/// }
///
/// let transition = StateTransition {
///     from: Task::Pending,
///     event: Signal::Start,
///     to: Task::Running,
///     delta: 10,
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_self_loop());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The event that triggered the transition
    pub event: E,
    /// The state being transitioned to
    pub to: S,
    /// Score change applied with the transition
    pub delta: i64,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State, E: Event> StateTransition<S, E> {
    /// True if the transition left the state unchanged.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of applied events.
///
/// `record` consumes the history and returns the extended one, so a history
/// value is never changed behind a caller's back.
///
/// # Example
///
/// ```rust
/// use statetable::core::{StateHistory, StateTransition};
/// use statetable::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Phase {
///         Start = 0,
///         Middle = 1,
///         End = 2,
///     }
/// }
///
/// event_enum! {
///     enum Tick {
///         Advance = 0,
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::Start,
///         event: Tick::Advance,
///         to: Phase::Middle,
///         delta: 5,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Phase::Middle,
///         event: Tick::Advance,
///         to: Phase::End,
///         delta: -2,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Start, &Phase::Middle, &Phase::End]);
/// assert_eq!(history.total_delta(), 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: Vec<StateTransition<S, E>>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Keep only the newest `limit` transitions.
    pub fn retain_latest(mut self, limit: usize) -> Self {
        let excess = self.transitions.len().saturating_sub(limit);
        if excess > 0 {
            tracing::trace!(dropped = excess, limit, "truncating transition history");
            self.transitions.drain(..excess);
        }
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to`
    /// state of every transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Events in the order they were applied.
    pub fn events(&self) -> Vec<E> {
        self.transitions.iter().map(|t| t.event).collect()
    }

    /// Sum of all recorded deltas.
    ///
    /// Equals the machine's score when nothing has been truncated.
    pub fn total_delta(&self) -> i64 {
        self.transitions.iter().map(|t| t.delta).sum()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

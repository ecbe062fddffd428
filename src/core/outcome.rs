//! Results of looking up and applying a transition.

use serde::{Deserialize, Serialize};

/// The next state and score delta for one (state, event) cell.
///
/// Outcomes are plain values. Producing one never touches a machine; the
/// machine commits it.
///
/// # Example
///
/// ```rust
/// use statetable::core::Outcome;
///
/// let gain = Outcome::new("Super", 100);
/// assert_eq!(gain.next, "Super");
/// assert_eq!(gain.delta, 100);
///
/// let idle = Outcome::stay("Small");
/// assert_eq!(idle, Outcome::new("Small", 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome<S> {
    /// State the machine moves to
    pub next: S,
    /// Amount added to the score
    pub delta: i64,
}

impl<S> Outcome<S> {
    /// Move to `next` and add `delta` to the score.
    pub fn new(next: S, delta: i64) -> Self {
        Self { next, delta }
    }

    /// Self-loop with no score change.
    pub fn stay(current: S) -> Self {
        Self {
            next: current,
            delta: 0,
        }
    }
}

/// Observable result of applying one event to a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step<S, E> {
    /// State before the event
    pub from: S,
    /// The applied event
    pub event: E,
    /// State after the event
    pub to: S,
    /// Score change for this step
    pub delta: i64,
    /// Running score after this step
    pub score: i64,
}

impl<S: PartialEq, E> Step<S, E> {
    /// True if the event left the state unchanged.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

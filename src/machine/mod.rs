//! Machine instances: a mutable (state, score) pair driven by events.
//!
//! Two designs share one interface, [`Automaton`]:
//!
//! - [`Machine`]: O(1) lookups in a shared transition/reward table
//! - [`HandlerMachine`]: dispatch to a stateless handler per state
//!
//! Given the same definition they produce identical trajectories.

mod config;
mod error;
mod polymorphic;
mod table_driven;
mod tally;

pub use config::MachineConfig;
pub use error::InvalidEvent;
pub use polymorphic::HandlerMachine;
pub use table_driven::Machine;

use crate::core::{Event, Outcome, State, StateHistory, Step};

/// Common interface of every machine instance.
///
/// `apply` commits the next state and the score delta together. Invalid
/// events are rejected before any lookup and leave the machine unchanged.
pub trait Automaton<S: State, E: Event> {
    /// Current state.
    fn current_state(&self) -> S;

    /// Running score, starting from 0.
    fn score(&self) -> i64;

    /// Transitions recorded so far.
    fn history(&self) -> &StateHistory<S, E>;

    /// The outcome `apply(event)` would commit, without committing it.
    fn peek(&self, event: E) -> Result<Outcome<S>, InvalidEvent>;

    /// Apply one event.
    fn apply(&mut self, event: E) -> Result<Step<S, E>, InvalidEvent>;

    /// Return to the initial state with score 0 and an empty history.
    fn reset(&mut self);

    /// Every event this machine accepts, in code order.
    fn available_events(&self) -> Vec<E> {
        E::by_code()
    }

    /// Apply an event given by its raw code.
    fn apply_code(&mut self, code: usize) -> Result<Step<S, E>, InvalidEvent> {
        let event = error::resolve_code(code).inspect_err(|err| {
            tracing::warn!(%err, "rejected event");
        })?;
        self.apply(event)
    }

    /// Apply an event given by its name.
    fn apply_named(&mut self, name: &str) -> Result<Step<S, E>, InvalidEvent> {
        let event = error::resolve_name(name).inspect_err(|err| {
            tracing::warn!(%err, "rejected event");
        })?;
        self.apply(event)
    }

    /// Apply a sequence of events and return every step taken.
    ///
    /// Stops at the first invalid event; steps already applied stay applied.
    fn run<I>(&mut self, events: I) -> Result<Vec<Step<S, E>>, InvalidEvent>
    where
        I: IntoIterator<Item = E>,
        Self: Sized,
    {
        events.into_iter().map(|event| self.apply(event)).collect()
    }
}

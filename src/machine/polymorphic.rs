//! State-pattern machine driven by per-state handlers.

use super::config::MachineConfig;
use super::error::{check_event, check_target, InvalidEvent};
use super::tally::Tally;
use super::Automaton;
use crate::core::{Event, Outcome, State, StateHistory, Step};
use crate::handler::HandlerSet;
use std::sync::Arc;

/// A machine instance that delegates every event to the handler of its
/// current state.
///
/// Observable behaviour is the same as [`Machine`](super::Machine): handlers
/// return an [`Outcome`] and the machine commits it. Choose this form when
/// transition logic differs qualitatively between states; choose the table
/// when every transition is a plain lookup.
///
/// The same concurrency rules apply as for the table-driven machine: the
/// handler set is shared read-only, and mutation of one instance must be
/// serialized by its owner.
pub struct HandlerMachine<S: State, E: Event> {
    handlers: Arc<HandlerSet<S, E>>,
    tally: Tally<S, E>,
}

impl<S: State, E: Event> HandlerMachine<S, E> {
    /// Create a machine in the handler set's initial state with score 0.
    pub fn new(handlers: Arc<HandlerSet<S, E>>) -> Self {
        Self::with_config(handlers, MachineConfig::default())
    }

    /// Create a machine with explicit history options.
    pub fn with_config(handlers: Arc<HandlerSet<S, E>>, config: MachineConfig) -> Self {
        let tally = Tally::new(handlers.initial(), config);
        Self { handlers, tally }
    }

    pub fn handlers(&self) -> &Arc<HandlerSet<S, E>> {
        &self.handlers
    }

    pub fn config(&self) -> MachineConfig {
        self.tally.config()
    }

    pub fn is_in(&self, state: S) -> bool {
        self.tally.current() == state
    }
}

impl<S: State, E: Event> Clone for HandlerMachine<S, E> {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            tally: self.tally.clone(),
        }
    }
}

impl<S: State, E: Event> std::fmt::Debug for HandlerMachine<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerMachine")
            .field("handlers", &self.handlers)
            .field("tally", &self.tally)
            .finish()
    }
}

impl<S: State, E: Event> Automaton<S, E> for HandlerMachine<S, E> {
    fn current_state(&self) -> S {
        self.tally.current()
    }

    fn score(&self) -> i64 {
        self.tally.score()
    }

    fn history(&self) -> &StateHistory<S, E> {
        self.tally.history()
    }

    fn peek(&self, event: E) -> Result<Outcome<S>, InvalidEvent> {
        check_event(&event)?;
        let outcome = self.handlers.dispatch(self.tally.current(), event);
        check_target(&event, &outcome.next)?;
        Ok(outcome)
    }

    fn apply(&mut self, event: E) -> Result<Step<S, E>, InvalidEvent> {
        let outcome = self.peek(event)?;
        self.tally.commit(event, outcome)
    }

    fn reset(&mut self) {
        self.tally.reset();
    }
}

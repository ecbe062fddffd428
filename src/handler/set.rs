//! Lookup table from state to handler.

use super::StateHandler;
use crate::builder::HandlerSetBuilder;
use crate::core::{Event, Outcome, State};

/// Boxed handler stored in a [`HandlerSet`].
pub(crate) type BoxedHandler<S, E> = Box<dyn StateHandler<S, E>>;

/// One handler per state, indexed by state code.
///
/// Built once through [`HandlerSet::builder`], which checks that every state
/// has exactly one handler. Handlers are stateless, so a set can be shared
/// freely behind an `Arc`.
pub struct HandlerSet<S: State, E: Event> {
    pub(crate) initial: S,
    pub(crate) handlers: Vec<BoxedHandler<S, E>>,
}

impl<S: State, E: Event> HandlerSet<S, E> {
    /// Start building a handler set.
    pub fn builder() -> HandlerSetBuilder<S, E> {
        HandlerSetBuilder::new()
    }

    /// State every new machine starts in.
    pub fn initial(&self) -> S {
        self.initial
    }

    /// The handler responsible for `state`.
    pub fn handler_for(&self, state: S) -> &dyn StateHandler<S, E> {
        self.handlers[state.code()].as_ref()
    }

    /// Dispatch `event` to the handler for `state`.
    pub fn dispatch(&self, state: S, event: E) -> Outcome<S> {
        let outcome = self.handler_for(state).handle(event);
        tracing::trace!(
            state = state.name(),
            event = event.name(),
            next = outcome.next.name(),
            delta = outcome.delta,
            "handler dispatch"
        );
        outcome
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<S: State, E: Event> std::fmt::Debug for HandlerSet<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerSet")
            .field("initial", &self.initial)
            .field(
                "states",
                &self.handlers.iter().map(|h| h.state()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

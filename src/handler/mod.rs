//! Per-state handlers: the state-pattern alternative to a transition table.
//!
//! Each state gets one stateless handler that maps an event to an
//! [`Outcome`]. Handlers never see or mutate the machine; they return the
//! next state and delta and the machine commits them. This keeps each
//! handler a pure function that can be tested on its own.

mod set;

pub use set::HandlerSet;

use crate::core::{Event, Outcome, State};
use std::marker::PhantomData;

/// Transition logic for a single state.
///
/// # Example
///
/// ```rust
/// use statetable::core::Outcome;
/// use statetable::handler::StateHandler;
/// use statetable::{event_enum, state_enum};
///
/// state_enum! {
///     enum Valve {
///         Closed = 0,
///         Open = 1,
///     }
/// }
///
/// event_enum! {
///     enum Turn {
///         Left = 0,
///         Right = 1,
///     }
/// }
///
/// struct ClosedValve;
///
/// impl StateHandler<Valve, Turn> for ClosedValve {
///     fn state(&self) -> Valve {
///         Valve::Closed
///     }
///
///     fn handle(&self, event: Turn) -> Outcome<Valve> {
///         match event {
///             Turn::Left => Outcome::new(Valve::Open, 1),
///             Turn::Right => Outcome::stay(Valve::Closed),
///         }
///     }
/// }
///
/// assert_eq!(ClosedValve.handle(Turn::Left), Outcome::new(Valve::Open, 1));
/// ```
pub trait StateHandler<S: State, E: Event>: Send + Sync {
    /// The state this handler is responsible for.
    fn state(&self) -> S;

    /// Compute the outcome of `event` while in [`state`](Self::state).
    fn handle(&self, event: E) -> Outcome<S>;
}

/// Handler backed by a closure.
pub struct FnHandler<S, E, F> {
    state: S,
    handle: F,
    _event: PhantomData<fn(E)>,
}

impl<S, E, F> FnHandler<S, E, F>
where
    S: State,
    E: Event,
    F: Fn(E) -> Outcome<S> + Send + Sync,
{
    pub fn new(state: S, handle: F) -> Self {
        Self {
            state,
            handle,
            _event: PhantomData,
        }
    }
}

impl<S, E, F> StateHandler<S, E> for FnHandler<S, E, F>
where
    S: State,
    E: Event,
    F: Fn(E) -> Outcome<S> + Send + Sync,
{
    fn state(&self) -> S {
        self.state
    }

    fn handle(&self, event: E) -> Outcome<S> {
        (self.handle)(event)
    }
}

//! Builder API for constructing rules and handler sets.
//!
//! This module provides fluent builders and macros for defining machines.
//! Every builder validates eagerly: an incomplete or inconsistent definition
//! is rejected by `build()` with a [`ConfigurationError`] listing every
//! problem, never discovered later during event application.

mod domain;
pub mod error;
pub mod handlers;
pub mod macros;
pub mod rules;

pub use error::{ConfigurationError, DomainKind, TableViolation};
pub use handlers::HandlerSetBuilder;
pub use rules::RulesBuilder;

use crate::core::{Event, Outcome, State};
use crate::handler::HandlerSet;
use crate::table::Rules;

/// Build rules by evaluating `f` on every (state, event) pair.
///
/// # Example
///
/// ```
/// use statetable::builder::tabulate;
/// use statetable::core::Outcome;
/// use statetable::{event_enum, state_enum};
///
/// state_enum! {
///     enum Level {
///         Low = 0,
///         High = 1,
///     }
/// }
///
/// event_enum! {
///     enum Nudge {
///         Up = 0,
///         Down = 1,
///     }
/// }
///
/// let rules = tabulate(Level::Low, |_, event: Nudge| match event {
///     Nudge::Up => Outcome::new(Level::High, 1),
///     Nudge::Down => Outcome::new(Level::Low, -1),
/// })
/// .unwrap();
///
/// assert_eq!(rules.lookup(Level::High, Nudge::Down), Outcome::new(Level::Low, -1));
/// ```
pub fn tabulate<S, E, F>(initial: S, f: F) -> Result<Rules<S, E>, ConfigurationError>
where
    S: State,
    E: Event,
    F: Fn(S, E) -> Outcome<S>,
{
    let mut builder = RulesBuilder::new().initial(initial);
    for state in S::VARIANTS {
        for event in E::VARIANTS {
            builder = builder.outcome(*state, *event, f(*state, *event));
        }
    }
    builder.build()
}

/// Compile a handler set into an equivalent transition table.
///
/// Every handler is asked for every event once. Handlers are pure, so the
/// resulting rules produce exactly the outcomes the handlers would.
pub fn compile_handlers<S, E>(handlers: &HandlerSet<S, E>) -> Result<Rules<S, E>, ConfigurationError>
where
    S: State,
    E: Event,
{
    tabulate(handlers.initial(), |state, event| handlers.dispatch(state, event))
}

//! Cell-by-cell comparison of a transition table and a handler set.
//!
//! Two definitions are equivalent when they agree on the initial state and
//! on the outcome of every (state, event) pair. Equivalent definitions
//! produce identical trajectories for every event sequence, because both
//! machines start in the same place and every step depends only on the
//! current state and the event.

use crate::core::{Event, Outcome, State};
use crate::handler::HandlerSet;
use crate::table::Rules;

/// One point where a table and a handler set disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Divergence<S, E> {
    /// The two definitions start in different states.
    Initial { table: S, handlers: S },

    /// The two definitions disagree on one cell.
    Cell {
        state: S,
        event: E,
        table: Outcome<S>,
        handlers: Outcome<S>,
    },
}

/// Every divergence between `rules` and `handlers`.
///
/// An empty result means the two designs are observably identical.
pub fn divergences<S: State, E: Event>(
    rules: &Rules<S, E>,
    handlers: &HandlerSet<S, E>,
) -> Vec<Divergence<S, E>> {
    let mut found = Vec::new();

    if rules.initial() != handlers.initial() {
        found.push(Divergence::Initial {
            table: rules.initial(),
            handlers: handlers.initial(),
        });
    }

    for state in S::by_code() {
        for event in E::by_code() {
            let table = rules.lookup(state, event);
            let handled = handlers.dispatch(state, event);
            if table != handled {
                found.push(Divergence::Cell {
                    state,
                    event,
                    table,
                    handlers: handled,
                });
            }
        }
    }

    if !found.is_empty() {
        tracing::debug!(count = found.len(), "table and handlers diverge");
    }
    found
}

/// True if `rules` and `handlers` agree everywhere.
pub fn equivalent<S: State, E: Event>(rules: &Rules<S, E>, handlers: &HandlerSet<S, E>) -> bool {
    divergences(rules, handlers).is_empty()
}

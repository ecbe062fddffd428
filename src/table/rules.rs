//! Validated rule sets: initial state plus transition and reward tables.

use super::grid::{RewardTable, TransitionTable};
use crate::builder::RulesBuilder;
use crate::core::{Event, Outcome, State};

/// Immutable definition of a table-driven machine.
///
/// A `Rules` value is total over `S × E`: every pair has a next state and a
/// reward. Build one with [`Rules::builder`], share it behind an `Arc`, and
/// create as many machines from it as needed. Nothing mutates it after
/// construction, so concurrent readers need no locking.
///
/// # Example
///
/// ```rust
/// use statetable::core::Outcome;
/// use statetable::table::Rules;
/// use statetable::{event_enum, state_enum};
///
/// state_enum! {
///     enum Lamp {
///         Off = 0,
///         On = 1,
///     }
/// }
///
/// event_enum! {
///     enum Switch {
///         Flip = 0,
///     }
/// }
///
/// let rules = Rules::builder()
///     .initial(Lamp::Off)
///     .on(Lamp::Off, Switch::Flip, Lamp::On, 1)
///     .on(Lamp::On, Switch::Flip, Lamp::Off, 0)
///     .build()
///     .unwrap();
///
/// assert_eq!(rules.initial(), Lamp::Off);
/// assert_eq!(rules.lookup(Lamp::Off, Switch::Flip), Outcome::new(Lamp::On, 1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules<S: State, E: Event> {
    pub(crate) initial: S,
    pub(crate) transitions: TransitionTable<S, E>,
    pub(crate) rewards: RewardTable<S, E>,
}

impl<S: State, E: Event> Rules<S, E> {
    /// Start building a rule set.
    pub fn builder() -> RulesBuilder<S, E> {
        RulesBuilder::new()
    }

    /// State every new machine starts in.
    pub fn initial(&self) -> S {
        self.initial
    }

    pub fn transitions(&self) -> &TransitionTable<S, E> {
        &self.transitions
    }

    pub fn rewards(&self) -> &RewardTable<S, E> {
        &self.rewards
    }

    /// Next state and delta for `event` in `state`.
    ///
    /// Both tables are indexed by the current state.
    pub fn lookup(&self, state: S, event: E) -> Outcome<S> {
        let next = *self.transitions.get(&state, &event);
        let delta = *self.rewards.get(&state, &event);
        tracing::trace!(
            state = state.name(),
            event = event.name(),
            next = next.name(),
            delta,
            "table lookup"
        );
        Outcome::new(next, delta)
    }

    /// Every cell as an outcome, in (state code, event code) order.
    pub fn cells(&self) -> impl Iterator<Item = (S, E, Outcome<S>)> + '_ {
        self.transitions
            .iter()
            .map(move |(state, event, next)| (state, event, Outcome::new(*next, *self.rewards.get(&state, &event))))
    }
}

//! Builder for table-driven rule sets.

use crate::builder::domain::{self, Check};
use crate::builder::error::{ConfigurationError, DomainKind, TableViolation};
use crate::core::{Event, Outcome, State};
use crate::table::{Grid, Rules};
use std::collections::HashMap;

/// Builder for constructing [`Rules`] with a fluent API.
///
/// Cells are collected as they are declared and checked all at once in
/// [`build`](RulesBuilder::build). By default every (state, event) pair
/// must receive both a transition and a reward. Calling
/// [`absorb_unspecified`](RulesBuilder::absorb_unspecified) turns every
/// untouched pair into a self-loop with zero reward instead. A pair with only
/// one of the two is still rejected.
pub struct RulesBuilder<S: State, E: Event> {
    initial: Option<S>,
    transitions: HashMap<(S, E), S>,
    rewards: HashMap<(S, E), i64>,
    duplicates: Vec<TableViolation>,
    absorb_unspecified: bool,
}

impl<S: State, E: Event> RulesBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: HashMap::new(),
            rewards: HashMap::new(),
            duplicates: Vec::new(),
            absorb_unspecified: false,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the next state for `(from, event)`.
    pub fn transition(mut self, from: S, event: E, to: S) -> Self {
        if self.transitions.insert((from, event), to).is_some() {
            self.duplicates.push(TableViolation::DuplicateTransition {
                state: from.name().to_string(),
                event: event.name().to_string(),
            });
        }
        self
    }

    /// Set the score delta for `(from, event)`.
    pub fn reward(mut self, from: S, event: E, delta: i64) -> Self {
        if self.rewards.insert((from, event), delta).is_some() {
            self.duplicates.push(TableViolation::DuplicateReward {
                state: from.name().to_string(),
                event: event.name().to_string(),
            });
        }
        self
    }

    /// Set both the next state and the delta for `(from, event)`.
    pub fn on(self, from: S, event: E, to: S, delta: i64) -> Self {
        self.transition(from, event, to).reward(from, event, delta)
    }

    /// Declare `(state, event)` an intentional no-op.
    pub fn stay(self, state: S, event: E) -> Self {
        self.on(state, event, state, 0)
    }

    /// Set a cell from an [`Outcome`].
    pub fn outcome(self, from: S, event: E, outcome: Outcome<S>) -> Self {
        self.on(from, event, outcome.next, outcome.delta)
    }

    /// Treat every pair with neither a transition nor a reward as a
    /// self-loop with zero delta.
    pub fn absorb_unspecified(mut self) -> Self {
        self.absorb_unspecified = true;
        self
    }

    /// Validate every cell and build the rules.
    ///
    /// All violations are reported together in
    /// [`ConfigurationError::InvalidTable`].
    pub fn build(self) -> Result<Rules<S, E>, ConfigurationError> {
        let initial = self.initial.ok_or(ConfigurationError::MissingInitialState)?;

        let mut domain_checks = domain::check_domain::<S>(DomainKind::State);
        domain_checks.extend(domain::check_domain::<E>(DomainKind::Event));
        domain::collect(domain_checks)
            .map_err(|violations| ConfigurationError::InvalidTable { violations })?;

        let states = S::by_code();
        let events = E::by_code();

        let mut checks: Vec<Check> = self.duplicates.iter().cloned().map(domain::fail).collect();
        let keys = self.transitions.keys().chain(self.rewards.keys());
        checks.extend(domain::check_members(
            DomainKind::State,
            std::iter::once(initial)
                .chain(keys.clone().map(|(state, _)| *state))
                .chain(self.transitions.values().copied()),
        ));
        checks.extend(domain::check_members(
            DomainKind::Event,
            keys.map(|(_, event)| *event),
        ));
        for state in &states {
            for event in &events {
                checks.extend(self.check_cell(*state, *event));
            }
        }
        domain::collect(checks)
            .map_err(|violations| ConfigurationError::InvalidTable { violations })?;

        let mut next_states = Vec::with_capacity(states.len() * events.len());
        let mut deltas = Vec::with_capacity(states.len() * events.len());
        for state in &states {
            for event in &events {
                let key = (*state, *event);
                next_states.push(self.transitions.get(&key).copied().unwrap_or(*state));
                deltas.push(self.rewards.get(&key).copied().unwrap_or(0));
            }
        }

        tracing::debug!(
            states = states.len(),
            events = events.len(),
            initial = initial.name(),
            absorbed = self.absorb_unspecified,
            "validated transition rules"
        );

        Ok(Rules {
            initial,
            transitions: Grid::from_cells(next_states),
            rewards: Grid::from_cells(deltas),
        })
    }

    fn check_cell(&self, state: S, event: E) -> Vec<Check> {
        let key = (state, event);
        let has_transition = self.transitions.contains_key(&key);
        let has_reward = self.rewards.contains_key(&key);

        if self.absorb_unspecified && !has_transition && !has_reward {
            return vec![domain::pass()];
        }

        let mut checks = Vec::new();
        if !has_transition {
            checks.push(domain::fail(TableViolation::MissingTransition {
                state: state.name().to_string(),
                event: event.name().to_string(),
            }));
        }
        if !has_reward {
            checks.push(domain::fail(TableViolation::MissingReward {
                state: state.name().to_string(),
                event: event.name().to_string(),
            }));
        }
        checks
    }
}

impl<S: State, E: Event> Default for RulesBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum TestState {
            Initial = 0,
            Processing = 1,
            Complete = 2,
        }
    }

    event_enum! {
        enum TestEvent {
            Start = 0,
            Finish = 1,
        }
    }

    fn full_builder() -> RulesBuilder<TestState, TestEvent> {
        RulesBuilder::new()
            .initial(TestState::Initial)
            .on(TestState::Initial, TestEvent::Start, TestState::Processing, 1)
            .stay(TestState::Initial, TestEvent::Finish)
            .stay(TestState::Processing, TestEvent::Start)
            .on(TestState::Processing, TestEvent::Finish, TestState::Complete, 10)
            .stay(TestState::Complete, TestEvent::Start)
            .stay(TestState::Complete, TestEvent::Finish)
    }

    #[test]
    fn builder_validates_initial_state() {
        let result = RulesBuilder::<TestState, TestEvent>::new().build();

        assert!(matches!(result, Err(ConfigurationError::MissingInitialState)));
    }

    #[test]
    fn complete_table_builds() {
        let rules = full_builder().build().unwrap();

        assert_eq!(rules.initial(), TestState::Initial);
        assert_eq!(
            rules.lookup(TestState::Processing, TestEvent::Finish),
            Outcome::new(TestState::Complete, 10)
        );
    }

    #[test]
    fn missing_cells_are_all_reported() {
        let result = RulesBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Initial)
            .on(TestState::Initial, TestEvent::Start, TestState::Processing, 1)
            .build();

        let error = result.unwrap_err();
        // 5 untouched cells, each missing both a transition and a reward
        assert_eq!(error.violations().len(), 10);
        assert!(error.violations().contains(&TableViolation::MissingTransition {
            state: "Complete".to_string(),
            event: "Finish".to_string(),
        }));
        assert!(error.violations().contains(&TableViolation::MissingReward {
            state: "Initial".to_string(),
            event: "Finish".to_string(),
        }));
    }

    #[test]
    fn absorb_fills_untouched_cells() {
        let rules = RulesBuilder::new()
            .initial(TestState::Initial)
            .on(TestState::Initial, TestEvent::Start, TestState::Processing, 1)
            .on(TestState::Processing, TestEvent::Finish, TestState::Complete, 10)
            .absorb_unspecified()
            .build()
            .unwrap();

        assert_eq!(rules, full_builder().build().unwrap());
    }

    #[test]
    fn absorb_does_not_hide_half_specified_cells() {
        let result = RulesBuilder::new()
            .initial(TestState::Initial)
            .transition(TestState::Initial, TestEvent::Start, TestState::Processing)
            .reward(TestState::Complete, TestEvent::Finish, 3)
            .absorb_unspecified()
            .build();

        let error = result.unwrap_err();
        assert_eq!(error.violations().len(), 2);
        assert!(error.violations().contains(&TableViolation::MissingReward {
            state: "Initial".to_string(),
            event: "Start".to_string(),
        }));
        assert!(error.violations().contains(&TableViolation::MissingTransition {
            state: "Complete".to_string(),
            event: "Finish".to_string(),
        }));
    }

    #[test]
    fn duplicate_cells_are_rejected() {
        let result = full_builder()
            .on(TestState::Initial, TestEvent::Start, TestState::Complete, 99)
            .build();

        let error = result.unwrap_err();
        assert_eq!(error.violations().len(), 2);
        assert!(error.violations().contains(&TableViolation::DuplicateTransition {
            state: "Initial".to_string(),
            event: "Start".to_string(),
        }));
        assert!(error.violations().contains(&TableViolation::DuplicateReward {
            state: "Initial".to_string(),
            event: "Start".to_string(),
        }));
    }

    mod leaky {
        use crate::core::{State, Variant};
        use serde::{Deserialize, Serialize};

        /// Lists only `A` and `B`; `Hidden` is reachable but unlisted.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub enum Leaky {
            A,
            B,
            Hidden,
        }

        impl Variant for Leaky {
            const VARIANTS: &'static [Self] = &[Self::A, Self::B];

            fn code(&self) -> usize {
                match self {
                    Self::A => 0,
                    Self::B => 1,
                    Self::Hidden => 7,
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    Self::A => "A",
                    Self::B => "B",
                    Self::Hidden => "Hidden",
                }
            }
        }

        impl State for Leaky {}
    }

    use leaky::Leaky;

    fn hidden_violation() -> TableViolation {
        TableViolation::OutsideDomain {
            kind: DomainKind::State,
            name: "Hidden".to_string(),
            code: 7,
        }
    }

    #[test]
    fn unlisted_transition_target_is_rejected() {
        let result = RulesBuilder::new()
            .initial(Leaky::A)
            .on(Leaky::A, TestEvent::Start, Leaky::Hidden, 1)
            .absorb_unspecified()
            .build();

        let error = result.unwrap_err();
        assert_eq!(error.violations(), &[hidden_violation()]);
    }

    #[test]
    fn unlisted_initial_state_is_rejected() {
        let result = RulesBuilder::<Leaky, TestEvent>::new()
            .initial(Leaky::Hidden)
            .absorb_unspecified()
            .build();

        let error = result.unwrap_err();
        assert_eq!(error.violations(), &[hidden_violation()]);
    }

    #[test]
    fn unlisted_source_state_is_rejected() {
        let result = RulesBuilder::new()
            .initial(Leaky::A)
            .on(Leaky::Hidden, TestEvent::Finish, Leaky::B, 2)
            .absorb_unspecified()
            .build();

        let error = result.unwrap_err();
        assert_eq!(error.violations(), &[hidden_violation()]);
    }

    #[test]
    fn outcome_sets_both_tables() {
        let rules = RulesBuilder::new()
            .initial(TestState::Complete)
            .outcome(TestState::Complete, TestEvent::Start, Outcome::new(TestState::Initial, -4))
            .absorb_unspecified()
            .build()
            .unwrap();

        assert_eq!(
            rules.lookup(TestState::Complete, TestEvent::Start),
            Outcome::new(TestState::Initial, -4)
        );
    }
}

//! Table-driven machine.

use super::config::MachineConfig;
use super::error::{check_event, InvalidEvent};
use super::tally::Tally;
use super::Automaton;
use crate::core::{Event, Outcome, State, StateHistory, Step};
use crate::table::Rules;
use std::sync::Arc;

/// A machine instance driven by a shared [`Rules`] table.
///
/// Each event costs one lookup in the transition table and one in the reward
/// table, both indexed by the current state.
///
/// # Concurrency
///
/// The rules are shared read-only and need no locking. The instance itself
/// has no internal synchronization: [`apply`](Automaton::apply) takes
/// `&mut self`, so callers that share one instance between threads must
/// serialize access themselves, for example with a `Mutex<Machine<_, _>>`
/// or by routing every event through a single owning thread.
///
/// # Example
///
/// ```rust
/// use statetable::machine::{Automaton, Machine};
/// use statetable::table::Rules;
/// use statetable::{event_enum, state_enum};
/// use std::sync::Arc;
///
/// state_enum! {
///     enum Turnstile {
///         Locked = 0,
///         Unlocked = 1,
///     }
/// }
///
/// event_enum! {
///     enum Input {
///         Coin = 0,
///         Push = 1,
///     }
/// }
///
/// let rules = Rules::builder()
///     .initial(Turnstile::Locked)
///     .on(Turnstile::Locked, Input::Coin, Turnstile::Unlocked, 25)
///     .on(Turnstile::Unlocked, Input::Push, Turnstile::Locked, 0)
///     .absorb_unspecified()
///     .build()
///     .unwrap();
///
/// let mut machine = Machine::new(Arc::new(rules));
/// machine.apply(Input::Coin).unwrap();
/// machine.apply(Input::Coin).unwrap();
///
/// assert_eq!(machine.current_state(), Turnstile::Unlocked);
/// assert_eq!(machine.score(), 25);
/// ```
#[derive(Clone, Debug)]
pub struct Machine<S: State, E: Event> {
    rules: Arc<Rules<S, E>>,
    tally: Tally<S, E>,
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create a machine in the rules' initial state with score 0.
    pub fn new(rules: Arc<Rules<S, E>>) -> Self {
        Self::with_config(rules, MachineConfig::default())
    }

    /// Create a machine with explicit history options.
    pub fn with_config(rules: Arc<Rules<S, E>>, config: MachineConfig) -> Self {
        let tally = Tally::new(rules.initial(), config);
        Self { rules, tally }
    }

    /// The shared rules this machine runs on.
    pub fn rules(&self) -> &Arc<Rules<S, E>> {
        &self.rules
    }

    pub fn config(&self) -> MachineConfig {
        self.tally.config()
    }

    /// True if the machine is currently in `state`.
    pub fn is_in(&self, state: S) -> bool {
        self.tally.current() == state
    }
}

impl<S: State, E: Event> Automaton<S, E> for Machine<S, E> {
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
        Ok(self.rules.lookup(self.tally.current(), event))
    }

    fn apply(&mut self, event: E) -> Result<Step<S, E>, InvalidEvent> {
        let outcome = self.peek(event)?;
        self.tally.commit(event, outcome)
    }

    fn reset(&mut self) {
        self.tally.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum WorkflowState {
            Initial = 0,
            Processing = 1,
            Complete = 2,
        }
    }

    event_enum! {
        enum WorkflowEvent {
            Begin = 0,
            Finish = 1,
            Abandon = 2,
        }
    }

    fn rules() -> Arc<Rules<WorkflowState, WorkflowEvent>> {
        Arc::new(
            Rules::builder()
                .initial(WorkflowState::Initial)
                .on(WorkflowState::Initial, WorkflowEvent::Begin, WorkflowState::Processing, 10)
                .on(WorkflowState::Processing, WorkflowEvent::Finish, WorkflowState::Complete, 50)
                .on(WorkflowState::Processing, WorkflowEvent::Abandon, WorkflowState::Initial, -10)
                .absorb_unspecified()
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn new_machine_starts_at_initial_with_zero_score() {
        let machine = Machine::new(rules());

        assert_eq!(machine.current_state(), WorkflowState::Initial);
        assert_eq!(machine.score(), 0);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn multi_step_workflow() {
        let mut machine = Machine::new(rules());

        let first = machine.apply(WorkflowEvent::Begin).unwrap();
        assert_eq!(first.to, WorkflowState::Processing);
        assert_eq!(first.score, 10);

        let second = machine.apply(WorkflowEvent::Finish).unwrap();
        assert_eq!(second.from, WorkflowState::Processing);
        assert_eq!(second.score, 60);
        assert!(machine.is_in(WorkflowState::Complete));

        let path = machine.history().get_path();
        assert_eq!(
            path,
            vec![
                &WorkflowState::Initial,
                &WorkflowState::Processing,
                &WorkflowState::Complete
            ]
        );
    }

    #[test]
    fn absorbed_event_is_a_recorded_self_loop() {
        let mut machine = Machine::new(rules());

        let step = machine.apply(WorkflowEvent::Finish).unwrap();

        assert!(step.is_self_loop());
        assert_eq!(step.delta, 0);
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn peek_does_not_mutate() {
        let machine = Machine::new(rules());

        let outcome = machine.peek(WorkflowEvent::Begin).unwrap();

        assert_eq!(outcome, Outcome::new(WorkflowState::Processing, 10));
        assert_eq!(machine.current_state(), WorkflowState::Initial);
        assert_eq!(machine.score(), 0);
    }

    #[test]
    fn apply_code_rejects_unknown_code_without_mutation() {
        let mut machine = Machine::new(rules());

        let result = machine.apply_code(7);

        assert_eq!(
            result,
            Err(InvalidEvent::UnknownCode {
                code: 7,
                cardinality: 3,
            })
        );
        assert_eq!(machine.current_state(), WorkflowState::Initial);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn apply_named_resolves_names() {
        let mut machine = Machine::new(rules());

        machine.apply_named("Begin").unwrap();
        let error = machine.apply_named("Explode").unwrap_err();

        assert_eq!(
            error,
            InvalidEvent::UnknownName {
                name: "Explode".to_string(),
            }
        );
        assert_eq!(machine.current_state(), WorkflowState::Processing);
        assert_eq!(machine.score(), 10);
    }

    #[test]
    fn reset_clears_state_score_and_history() {
        let mut machine = Machine::new(rules());
        machine.apply(WorkflowEvent::Begin).unwrap();

        machine.reset();

        assert_eq!(machine.current_state(), WorkflowState::Initial);
        assert_eq!(machine.score(), 0);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn machines_share_one_table() {
        let rules = rules();
        let mut a = Machine::new(Arc::clone(&rules));
        let b = Machine::new(Arc::clone(&rules));

        a.apply(WorkflowEvent::Begin).unwrap();

        assert_eq!(a.current_state(), WorkflowState::Processing);
        assert_eq!(b.current_state(), WorkflowState::Initial);
        assert_eq!(Arc::strong_count(&rules), 3);
    }

    #[test]
    fn available_events_lists_domain() {
        let machine = Machine::new(rules());
        assert_eq!(machine.available_events().len(), 3);
    }
}

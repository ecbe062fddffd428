//! Mutable (state, score) pair shared by both machine designs.

use super::config::MachineConfig;
use super::error::InvalidEvent;
use crate::core::{Event, Outcome, State, StateHistory, StateTransition, Step};
use chrono::Utc;

/// Current state, running score and history of one machine instance.
///
/// `commit` is the only place either field changes, and it changes both in
/// the same call, so no caller can observe a new state with an old score.
#[derive(Clone, Debug)]
pub(crate) struct Tally<S: State, E: Event> {
    initial: S,
    current: S,
    score: i64,
    history: StateHistory<S, E>,
    config: MachineConfig,
}

impl<S: State, E: Event> Tally<S, E> {
    pub(crate) fn new(initial: S, config: MachineConfig) -> Self {
        Self {
            initial,
            current: initial,
            score: 0,
            history: StateHistory::new(),
            config,
        }
    }

    pub(crate) fn current(&self) -> S {
        self.current
    }

    pub(crate) fn score(&self) -> i64 {
        self.score
    }

    pub(crate) fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    pub(crate) fn config(&self) -> MachineConfig {
        self.config
    }

    /// Apply an outcome computed for `event` from the current state.
    ///
    /// Nothing changes if the new score would overflow.
    pub(crate) fn commit(
        &mut self,
        event: E,
        outcome: Outcome<S>,
    ) -> Result<Step<S, E>, InvalidEvent> {
        let from = self.current;
        let score = self.score.checked_add(outcome.delta).ok_or_else(|| {
            tracing::warn!(
                event = event.name(),
                score = self.score,
                delta = outcome.delta,
                "score overflow"
            );
            InvalidEvent::ScoreOverflow {
                event: event.name().to_string(),
                score: self.score,
                delta: outcome.delta,
            }
        })?;

        self.current = outcome.next;
        self.score = score;

        if self.config.record_history {
            let history = std::mem::take(&mut self.history).record(StateTransition {
                from,
                event,
                to: outcome.next,
                delta: outcome.delta,
                timestamp: Utc::now(),
            });
            self.history = match self.config.history_limit {
                Some(limit) => history.retain_latest(limit),
                None => history,
            };
        }

        tracing::debug!(
            from = from.name(),
            event = event.name(),
            to = outcome.next.name(),
            delta = outcome.delta,
            score,
            "applied event"
        );

        Ok(Step {
            from,
            event,
            to: outcome.next,
            delta: outcome.delta,
            score,
        })
    }

    /// Back to the initial state with score 0 and an empty history.
    pub(crate) fn reset(&mut self) {
        tracing::debug!(initial = self.initial.name(), score = self.score, "reset machine");
        self.current = self.initial;
        self.score = 0;
        self.history = StateHistory::new();
    }
}

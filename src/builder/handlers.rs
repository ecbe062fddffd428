//! Builder for per-state handler sets.

use crate::builder::domain::{self, Check};
use crate::builder::error::{ConfigurationError, DomainKind, TableViolation};
use crate::core::{Event, Outcome, State};
use crate::handler::{FnHandler, HandlerSet, StateHandler};
use std::collections::HashMap;

/// Builder for constructing a [`HandlerSet`].
///
/// Handlers may be registered in any order; each one is filed under the state
/// it reports from [`StateHandler::state`].
pub struct HandlerSetBuilder<S: State, E: Event> {
    initial: Option<S>,
    handlers: HashMap<S, Box<dyn StateHandler<S, E>>>,
    duplicates: Vec<TableViolation>,
}

impl<S: State, E: Event> HandlerSetBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            handlers: HashMap::new(),
            duplicates: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register a handler.
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: StateHandler<S, E> + 'static,
    {
        let state = handler.state();
        if self.handlers.insert(state, Box::new(handler)).is_some() {
            self.duplicates.push(TableViolation::DuplicateHandler {
                state: state.name().to_string(),
            });
        }
        self
    }

    /// Register a closure as the handler for `state`.
    pub fn on_state<F>(self, state: S, handle: F) -> Self
    where
        F: Fn(E) -> Outcome<S> + Send + Sync + 'static,
    {
        self.handler(FnHandler::new(state, handle))
    }

    /// Build the handler set.
    ///
    /// Every state must have exactly one handler. All violations are
    /// reported together in [`ConfigurationError::InvalidHandlers`].
    pub fn build(mut self) -> Result<HandlerSet<S, E>, ConfigurationError> {
        let initial = self.initial.ok_or(ConfigurationError::MissingInitialState)?;

        let mut domain_checks = domain::check_domain::<S>(DomainKind::State);
        domain_checks.extend(domain::check_domain::<E>(DomainKind::Event));
        domain::collect(domain_checks)
            .map_err(|violations| ConfigurationError::InvalidHandlers { violations })?;

        let states = S::by_code();
        let mut checks: Vec<Check> = self.duplicates.iter().cloned().map(domain::fail).collect();
        checks.extend(domain::check_members(
            DomainKind::State,
            std::iter::once(initial).chain(self.handlers.keys().copied()),
        ));
        for state in &states {
            checks.push(if self.handlers.contains_key(state) {
                domain::pass()
            } else {
                domain::fail(TableViolation::MissingHandler {
                    state: state.name().to_string(),
                })
            });
        }
        domain::collect(checks)
            .map_err(|violations| ConfigurationError::InvalidHandlers { violations })?;

        let handlers: Vec<_> = states
            .iter()
            .filter_map(|state| self.handlers.remove(state))
            .collect();

        tracing::debug!(
            states = handlers.len(),
            initial = initial.name(),
            "validated handler set"
        );

        Ok(HandlerSet { initial, handlers })
    }
}

impl<S: State, E: Event> Default for HandlerSetBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

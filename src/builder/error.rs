//! Configuration errors for rule and handler builders.

use std::fmt;
use thiserror::Error;

/// Which enumeration a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    State,
    Event,
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State => f.write_str("state"),
            Self::Event => f.write_str("event"),
        }
    }
}

/// A single problem found while validating a table or handler set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("The {kind} enumeration declares no variants")]
    EmptyDomain { kind: DomainKind },

    #[error("The {kind} codes are not dense: expected code {expected}, found {found}")]
    NonDenseCodes {
        kind: DomainKind,
        expected: usize,
        found: usize,
    },

    #[error("The {kind} name '{name}' is used by more than one variant")]
    DuplicateName { kind: DomainKind, name: String },

    #[error("The {kind} '{name}' with code {code} is not listed in its enumeration")]
    OutsideDomain {
        kind: DomainKind,
        name: String,
        code: usize,
    },

    #[error("No transition defined for ({state}, {event})")]
    MissingTransition { state: String, event: String },

    #[error("No reward defined for ({state}, {event})")]
    MissingReward { state: String, event: String },

    #[error("Transition for ({state}, {event}) defined more than once")]
    DuplicateTransition { state: String, event: String },

    #[error("Reward for ({state}, {event}) defined more than once")]
    DuplicateReward { state: String, event: String },

    #[error("No handler registered for state '{state}'")]
    MissingHandler { state: String },

    #[error("Handler for state '{state}' registered more than once")]
    DuplicateHandler { state: String },
}

/// Errors that can occur when building rules and handler sets.
///
/// Every variant is a defect in the machine definition. None of them can be
/// fixed by retrying.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition table is invalid: {}", summarize(.violations))]
    InvalidTable { violations: Vec<TableViolation> },

    #[error("Handler set is invalid: {}", summarize(.violations))]
    InvalidHandlers { violations: Vec<TableViolation> },
}

impl ConfigurationError {
    /// Every violation carried by this error. Empty for `MissingInitialState`.
    pub fn violations(&self) -> &[TableViolation] {
        match self {
            Self::MissingInitialState => &[],
            Self::InvalidTable { violations } | Self::InvalidHandlers { violations } => {
                violations.as_slice()
            }
        }
    }
}

fn summarize(violations: &[TableViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

//! Statetable: table-driven finite state machines with score tracking
//!
//! A machine holds a current state and a running score. Each event is looked
//! up in an immutable transition table and an immutable reward table, both
//! indexed by the current state, and the machine commits the next state and
//! the score delta together. Tables are validated once at build time, so a
//! running machine never meets an undefined cell.
//!
//! The same behaviour can also be written in the state pattern: one
//! stateless [`StateHandler`](handler::StateHandler) per state. Both designs
//! implement [`Automaton`](machine::Automaton) and can be checked cell by
//! cell for equivalence.
//!
//! # Core Concepts
//!
//! - **Variants**: states and events with explicit table codes, declared
//!   with [`state_enum!`] and [`event_enum!`]
//! - **Rules**: the initial state plus total transition and reward tables
//! - **Machines**: a mutable (state, score) pair driven by events
//! - **History**: an ordered record of every committed step
//!
//! # Example
//!
//! ```rust
//! use statetable::machine::{Automaton, Machine};
//! use statetable::table::Rules;
//! use statetable::{event_enum, state_enum};
//! use std::sync::Arc;
//!
//! state_enum! {
//!     enum Door {
//!         Closed = 0,
//!         Open = 1,
//!     }
//! }
//!
//! event_enum! {
//!     enum Action {
//!         Push = 0,
//!         Pull = 1,
//!     }
//! }
//!
//! let rules = Rules::builder()
//!     .initial(Door::Closed)
//!     .on(Door::Closed, Action::Push, Door::Open, 1)
//!     .stay(Door::Closed, Action::Pull)
//!     .stay(Door::Open, Action::Push)
//!     .on(Door::Open, Action::Pull, Door::Closed, 0)
//!     .build()
//!     .unwrap();
//!
//! let mut machine = Machine::new(Arc::new(rules));
//! let step = machine.apply(Action::Push).unwrap();
//!
//! assert_eq!(step.to, Door::Open);
//! assert_eq!(machine.score(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod equivalence;
pub mod handler;
pub mod machine;
pub mod mario;
pub mod table;

// Re-export commonly used types
pub use builder::{ConfigurationError, RulesBuilder, TableViolation};
pub use crate::core::{Event, Outcome, State, StateHistory, StateTransition, Step, Variant};
pub use handler::{HandlerSet, StateHandler};
pub use machine::{Automaton, HandlerMachine, InvalidEvent, Machine, MachineConfig};
pub use table::Rules;

//! Core state machine types.
//!
//! This module contains the value types shared by every machine:
//! - State and event enumerations via the `Variant`, `State` and `Event` traits
//! - Transition outcomes and applied steps
//! - Transition history
//!
//! Nothing in here mutates a machine.

mod history;
mod outcome;
mod state;
mod variant;

pub use history::{StateHistory, StateTransition};
pub use outcome::{Outcome, Step};
pub use state::{Event, State};
pub use variant::Variant;

//! Table-driven rule storage.
//!
//! A [`Rules`] value bundles the initial state with a dense
//! [`TransitionTable`] and a [`RewardTable`] of the same shape.

mod grid;
mod rules;

pub use grid::{Grid, RewardTable, TransitionTable};
pub use rules::Rules;

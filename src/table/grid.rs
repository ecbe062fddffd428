//! Dense (state, event) grids.

use crate::core::{Event, State};
use std::marker::PhantomData;

/// Total mapping from (state, event) to a value.
///
/// Cells are stored row-major: one row per state code, one column per
/// event code. Grids only come out of the rules builder, which has already
/// checked that both enumerations have dense codes and that every cell is
/// filled, so a lookup is a single index operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<S, E, T> {
    cells: Vec<T>,
    _domain: PhantomData<fn() -> (S, E)>,
}

/// Next state for every (state, event) pair.
pub type TransitionTable<S, E> = Grid<S, E, S>;

/// Score delta for every (state, event) pair.
pub type RewardTable<S, E> = Grid<S, E, i64>;

impl<S: State, E: Event, T> Grid<S, E, T> {
    /// Build from row-major cells. Caller guarantees the length.
    pub(crate) fn from_cells(cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), S::cardinality() * E::cardinality());
        Self {
            cells,
            _domain: PhantomData,
        }
    }

    fn offset(state: &S, event: &E) -> usize {
        state.code() * E::cardinality() + event.code()
    }

    /// Value stored for `(state, event)`.
    pub fn get(&self, state: &S, event: &E) -> &T {
        &self.cells[Self::offset(state, event)]
    }

    /// Number of cells, always `|S| * |E|`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every cell in (state code, event code) order.
    pub fn iter(&self) -> impl Iterator<Item = (S, E, &T)> + '_ {
        S::by_code().into_iter().flat_map(move |state| {
            E::by_code()
                .into_iter()
                .map(move |event| (state, event, self.get(&state, &event)))
        })
    }

    /// The row for one state, in event code order.
    pub fn row(&self, state: &S) -> &[T] {
        let width = E::cardinality();
        let start = state.code() * width;
        &self.cells[start..start + width]
    }
}

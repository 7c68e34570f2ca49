//! Transition storage.
//!
//! The table is a dense `states × ALPHABET_SIZE` grid stored row-major. Each
//! cell holds the set of destinations recorded for that (state, column) pair.
//! An empty cell means no transition. Lookups consume only the first
//! destination, so a cell with several entries behaves as if it held the one
//! inserted first.

use crate::alphabet::ALPHABET_SIZE;
use crate::error::CoreError;

/// Small insertion-ordered set of destination states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationSet {
    states: Vec<usize>,
}

impl DestinationSet {
    /// Adds a destination. Returns false if it was already present.
    pub fn insert(&mut self, state: usize) -> bool {
        if self.states.contains(&state) {
            return false;
        }
        self.states.push(state);
        true
    }

    pub fn contains(&self, state: usize) -> bool {
        self.states.contains(&state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// First destination in iteration order.
    pub fn first(&self) -> Option<usize> {
        self.states.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.states.iter().copied()
    }
}

/// Transition grid for a fixed number of states.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    states: usize,
    cells: Vec<DestinationSet>,
}

impl TransitionTable {
    /// Allocates an empty grid.
    ///
    /// Fails with [`CoreError::Allocation`] if the grid size overflows or the
    /// memory cannot be reserved.
    pub fn new(states: usize) -> Result<Self, CoreError> {
        let len = states
            .checked_mul(ALPHABET_SIZE)
            .ok_or(CoreError::Allocation { states })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| CoreError::Allocation { states })?;
        cells.resize_with(len, DestinationSet::default);

        Ok(Self { states, cells })
    }

    /// Returns the number of rows.
    pub fn states(&self) -> usize {
        self.states
    }

    /// Records `destination` as a candidate for the cell.
    pub fn insert(
        &mut self,
        state: usize,
        column: usize,
        destination: usize,
    ) -> Result<bool, CoreError> {
        self.check_state(destination)?;
        let idx = self.cell_index(state, column)?;
        Ok(self.cells[idx].insert(destination))
    }

    /// Returns the first destination recorded for the cell, if any.
    pub fn lookup(&self, state: usize, column: usize) -> Option<usize> {
        self.cell(state, column).and_then(DestinationSet::first)
    }

    /// Returns how many destinations the cell holds.
    pub fn count(&self, state: usize, column: usize) -> usize {
        self.cell(state, column).map_or(0, DestinationSet::len)
    }

    /// Returns the cell, or `None` if either coordinate is out of range.
    pub fn cell(&self, state: usize, column: usize) -> Option<&DestinationSet> {
        self.cell_index(state, column)
            .ok()
            .map(|idx| &self.cells[idx])
    }

    /// Iterates over the non-empty cells as `(state, column, destinations)`.
    pub fn defined(&self) -> impl Iterator<Item = (usize, usize, &DestinationSet)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(idx, cell)| (idx / ALPHABET_SIZE, idx % ALPHABET_SIZE, cell))
    }

    fn check_state(&self, state: usize) -> Result<(), CoreError> {
        if state < self.states {
            Ok(())
        } else {
            Err(CoreError::StateOutOfRange {
                state,
                size: self.states,
            })
        }
    }

    fn cell_index(&self, state: usize, column: usize) -> Result<usize, CoreError> {
        self.check_state(state)?;
        if column >= ALPHABET_SIZE {
            return Err(CoreError::ColumnOutOfRange { index: column });
        }
        Ok(state * ALPHABET_SIZE + column)
    }
}

//! Automaton construction and queries.

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::CoreError;
use crate::table::{DestinationSet, TransitionTable};
use std::fmt;

/// Accepting state of a freshly created automaton.
pub const DEFAULT_ACCEPTING: usize = 1;

/// A deterministic finite automaton over the 36-symbol alphabet.
///
/// States are plain indices in `0..size()`. Runs always start in state 0.
/// Exactly one state is accepting at any time; marking another state
/// accepting replaces it.
#[derive(Debug, Clone)]
pub struct Automaton {
    table: TransitionTable,
    accepting: usize,
}

impl Automaton {
    /// Creates an automaton with `states` states and no transitions.
    ///
    /// State 1 is accepting until [`mark_accepting`](Self::mark_accepting)
    /// says otherwise.
    pub fn new(states: usize) -> Result<Self, CoreError> {
        let table = TransitionTable::new(states)?;
        tracing::debug!("created automaton with {} states", states);
        Ok(Self {
            table,
            accepting: DEFAULT_ACCEPTING,
        })
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.table.states()
    }

    /// Adds a transition from `state` on `symbol` to `destination`.
    pub fn set_transition(
        &mut self,
        state: usize,
        symbol: char,
        destination: usize,
    ) -> Result<(), CoreError> {
        let column = alphabet::encode(symbol)?;
        self.table.insert(state, column, destination)?;
        Ok(())
    }

    /// Adds the same transition for every symbol in `symbols`.
    ///
    /// Symbols are validated up front, so an unsupported symbol leaves the
    /// table unchanged.
    pub fn set_transition_for_symbols(
        &mut self,
        state: usize,
        symbols: &str,
        destination: usize,
    ) -> Result<(), CoreError> {
        let columns = symbols
            .chars()
            .map(alphabet::encode)
            .collect::<Result<Vec<_>, _>>()?;
        for column in columns {
            self.table.insert(state, column, destination)?;
        }
        Ok(())
    }

    /// Adds a transition from `state` to `destination` on every symbol.
    pub fn set_transition_for_all_symbols(
        &mut self,
        state: usize,
        destination: usize,
    ) -> Result<(), CoreError> {
        for column in 0..ALPHABET_SIZE {
            self.table.insert(state, column, destination)?;
        }
        Ok(())
    }

    /// Marks `state` accepting when `accepting` is true. A false value is a
    /// no-op: states are never unmarked, only replaced.
    pub fn mark_accepting(&mut self, state: usize, accepting: bool) -> Result<(), CoreError> {
        if !accepting {
            return Ok(());
        }
        if state >= self.size() {
            return Err(CoreError::StateOutOfRange {
                state,
                size: self.size(),
            });
        }
        self.accepting = state;
        Ok(())
    }

    pub fn is_accepting(&self, state: usize) -> bool {
        state == self.accepting
    }

    pub fn accepting_state(&self) -> usize {
        self.accepting
    }

    /// Returns the destination from `state` on `symbol`, or `None` if no
    /// transition is defined or the symbol is not in the alphabet.
    pub fn get_transition(&self, state: usize, symbol: char) -> Option<usize> {
        let column = alphabet::encode(symbol).ok()?;
        self.table.lookup(state, column)
    }

    /// Returns every destination recorded for `state` on `symbol`.
    pub fn destinations(&self, state: usize, symbol: char) -> Option<&DestinationSet> {
        let column = alphabet::encode(symbol).ok()?;
        self.table.cell(state, column)
    }

    /// Returns how many destinations are recorded for `state` on `symbol`.
    pub fn transition_count(&self, state: usize, symbol: char) -> usize {
        self.destinations(state, symbol)
            .map_or(0, DestinationSet::len)
    }

    /// Returns true if no cell holds more than one destination.
    pub fn is_deterministic(&self) -> bool {
        self.table.defined().all(|(_, _, cell)| cell.len() == 1)
    }

    /// Returns the underlying transition table.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "states: {}", self.size())?;
        for (state, column, cell) in self.table.defined() {
            let symbol = alphabet::decode(column).unwrap_or('?');
            let targets: Vec<String> = cell.iter().map(|d| d.to_string()).collect();
            writeln!(f, "{} --{}--> {}", state, symbol, targets.join(","))?;
        }
        write!(f, "accepting: {}", self.accepting)
    }
}

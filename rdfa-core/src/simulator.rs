//! Simulation of an input string through an automaton.
//!
//! The cursor is local to each run, so an automaton can be shared read-only
//! across any number of runs.

use crate::alphabet;
use crate::automaton::Automaton;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State every run starts in.
pub const START_STATE: usize = 0;

/// Why a run was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// Input was exhausted in a non-accepting state.
    NotAccepting { state: usize },
    /// No transition from `state` on `symbol`.
    NoTransition {
        state: usize,
        symbol: char,
        position: usize,
    },
    /// `symbol` is not part of the alphabet.
    OutOfAlphabet { symbol: char, position: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotAccepting { state } => {
                write!(f, "input ended in non-accepting state {}", state)
            }
            Rejection::NoTransition {
                state,
                symbol,
                position,
            } => write!(
                f,
                "no transition from state {} on {:?} at position {}",
                state, symbol, position
            ),
            Rejection::OutOfAlphabet { symbol, position } => {
                write!(f, "symbol {:?} at position {} is not in the alphabet", symbol, position)
            }
        }
    }
}

/// Detailed result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub accepted: bool,
    /// State the cursor ended in. `None` if the run stopped on a missing
    /// transition.
    pub final_state: Option<usize>,
    /// Number of symbols consumed before the run stopped.
    pub consumed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

/// Drives input through an automaton.
pub struct Simulator;

impl Simulator {
    /// Returns true if `automaton` accepts `input`.
    pub fn run(automaton: &Automaton, input: &str) -> bool {
        Self::trace(automaton, input).accepted
    }

    /// Runs `input` and reports where and why the run ended.
    pub fn trace(automaton: &Automaton, input: &str) -> RunOutcome {
        let mut cursor = START_STATE;

        for (position, symbol) in input.chars().enumerate() {
            let rejection = if alphabet::encode(symbol).is_err() {
                Rejection::OutOfAlphabet { symbol, position }
            } else if let Some(next) = automaton.get_transition(cursor, symbol) {
                tracing::trace!("{} --{}--> {}", cursor, symbol, next);
                cursor = next;
                continue;
            } else {
                Rejection::NoTransition {
                    state: cursor,
                    symbol,
                    position,
                }
            };

            tracing::debug!("run rejected: {}", rejection);
            return RunOutcome {
                accepted: false,
                final_state: None,
                consumed: position,
                rejection: Some(rejection),
            };
        }

        let consumed = input.chars().count();
        if automaton.is_accepting(cursor) {
            RunOutcome {
                accepted: true,
                final_state: Some(cursor),
                consumed,
                rejection: None,
            }
        } else {
            let rejection = Rejection::NotAccepting { state: cursor };
            tracing::debug!("run rejected: {}", rejection);
            RunOutcome {
                accepted: false,
                final_state: Some(cursor),
                consumed,
                rejection: Some(rejection),
            }
        }
    }
}

//! # rdfa-core
//!
//! Table-driven deterministic finite automaton engine.
//!
//! This crate provides:
//! - Symbol encoding over the 36-symbol alphabet (`a`-`z`, `0`-`9`)
//! - Per-cell transition storage
//! - Automaton construction and queries
//! - Simulation of an input string to an accept/reject verdict
//! - A JSON definition format for describing automata

pub mod alphabet;
pub mod automaton;
pub mod definition;
pub mod error;
pub mod simulator;
pub mod table;

pub use alphabet::{decode, encode, ALPHABET_SIZE};
pub use automaton::Automaton;
pub use definition::{MachineDefinition, MachineDefinitionRaw, Symbols, TransitionSpec};
pub use error::CoreError;
pub use simulator::{Rejection, RunOutcome, Simulator};
pub use table::{DestinationSet, TransitionTable};

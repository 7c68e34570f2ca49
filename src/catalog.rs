//! Prebuilt automata offered by the harness.

use rdfa_core::{Automaton, CoreError};

/// A named, prebuilt automaton.
#[derive(Debug)]
pub struct Entry {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Result<Automaton, CoreError>,
}

impl Entry {
    /// Builds a fresh automaton for this entry.
    pub fn build(&self) -> Result<Automaton, CoreError> {
        (self.build)()
    }
}

/// All prebuilt automata, in menu order.
pub const ENTRIES: &[Entry] = &[
    Entry {
        name: "csc173",
        description: "exactly 'csc173'",
        build: exact_csc173,
    },
    Entry {
        name: "cat",
        description: "any string starting with 'cat'",
        build: starts_with_cat,
    },
    Entry {
        name: "even-zeros",
        description: "binary input with an even number of 0s",
        build: even_zeros,
    },
    Entry {
        name: "even-zeros-ones",
        description: "binary input with an even number of both 0s and 1s",
        build: even_zeros_and_ones,
    },
    Entry {
        name: "starts-1-ends-0",
        description: "binary input starting with 1 and ending with 0",
        build: starts_one_ends_zero,
    },
];

/// Looks up an entry by name or 1-based menu number.
pub fn find(key: &str) -> Option<&'static Entry> {
    let key = key.trim();
    if let Ok(n) = key.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| ENTRIES.get(i));
    }
    ENTRIES.iter().find(|e| e.name.eq_ignore_ascii_case(key))
}

fn exact_csc173() -> Result<Automaton, CoreError> {
    let mut dfa = Automaton::new(7)?;
    for (state, symbol) in "csc173".chars().enumerate() {
        dfa.set_transition(state, symbol, state + 1)?;
    }
    dfa.mark_accepting(6, true)?;
    Ok(dfa)
}

fn starts_with_cat() -> Result<Automaton, CoreError> {
    let mut dfa = Automaton::new(4)?;
    dfa.set_transition(0, 'c', 1)?;
    dfa.set_transition(1, 'a', 2)?;
    dfa.set_transition(2, 't', 3)?;
    dfa.set_transition_for_all_symbols(3, 3)?;
    dfa.mark_accepting(3, true)?;
    Ok(dfa)
}

fn even_zeros() -> Result<Automaton, CoreError> {
    let mut dfa = Automaton::new(2)?;
    dfa.set_transition(0, '1', 0)?;
    dfa.set_transition(0, '0', 1)?;
    dfa.set_transition(1, '0', 0)?;
    dfa.set_transition(1, '1', 1)?;
    dfa.mark_accepting(0, true)?;
    Ok(dfa)
}

// States track (zeros, ones) parity: 0 = (even, even), 1 = (odd, even),
// 2 = (even, odd), 3 = (odd, odd).
fn even_zeros_and_ones() -> Result<Automaton, CoreError> {
    let mut dfa = Automaton::new(4)?;
    dfa.set_transition(0, '0', 1)?;
    dfa.set_transition(0, '1', 2)?;
    dfa.set_transition(1, '0', 0)?;
    dfa.set_transition(1, '1', 3)?;
    dfa.set_transition(2, '0', 3)?;
    dfa.set_transition(2, '1', 0)?;
    dfa.set_transition(3, '0', 2)?;
    dfa.set_transition(3, '1', 1)?;
    dfa.mark_accepting(0, true)?;
    Ok(dfa)
}

fn starts_one_ends_zero() -> Result<Automaton, CoreError> {
    let mut dfa = Automaton::new(4)?;
    dfa.set_transition(0, '1', 1)?;
    dfa.set_transition(0, '0', 3)?;
    dfa.set_transition(1, '0', 2)?;
    dfa.set_transition(1, '1', 1)?;
    dfa.set_transition(2, '0', 2)?;
    dfa.set_transition(2, '1', 1)?;
    dfa.set_transition_for_symbols(3, "01", 3)?;
    dfa.mark_accepting(2, true)?;
    Ok(dfa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfa_core::Simulator;

    fn run(name: &str, input: &str) -> bool {
        let dfa = find(name).unwrap().build().unwrap();
        Simulator::run(&dfa, input)
    }

    #[test]
    fn test_all_entries_build() {
        for entry in ENTRIES {
            let dfa = entry.build().unwrap();
            assert!(dfa.is_deterministic(), "{} is not deterministic", entry.name);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("1").unwrap().name, "csc173");
        assert_eq!(find(" 2 ").unwrap().name, "cat");
        assert_eq!(find("EVEN-ZEROS").unwrap().name, "even-zeros");
        assert!(find("0").is_none());
        assert!(find("6").is_none());
        assert!(find("dog").is_none());
    }

    #[test]
    fn test_csc173() {
        assert!(run("csc173", "csc173"));
        assert!(!run("csc173", "csc17"));
        assert!(!run("csc173", "xsc173"));
        assert!(!run("csc173", "CSC173"));
    }

    #[test]
    fn test_cat() {
        assert!(run("cat", "cat"));
        assert!(run("cat", "category"));
        assert!(!run("cat", "ca"));
        assert!(!run("cat", "dog"));
    }

    #[test]
    fn test_even_zeros() {
        assert!(!run("even-zeros", "0"));
        assert!(run("even-zeros", "00"));
        assert!(run("even-zeros", ""));
        assert!(run("even-zeros", "110101"));
    }

    #[test]
    fn test_even_zeros_ones() {
        assert!(run("even-zeros-ones", ""));
        assert!(run("even-zeros-ones", "0011"));
        assert!(run("even-zeros-ones", "1010"));
        assert!(!run("even-zeros-ones", "001"));
        assert!(!run("even-zeros-ones", "01"));
    }

    #[test]
    fn test_starts_one_ends_zero() {
        assert!(run("starts-1-ends-0", "10"));
        assert!(run("starts-1-ends-0", "1100"));
        assert!(run("starts-1-ends-0", "1010"));
        assert!(!run("starts-1-ends-0", "1"));
        assert!(!run("starts-1-ends-0", "0110"));
        assert!(!run("starts-1-ends-0", ""));
    }
}

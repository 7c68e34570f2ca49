//! Automaton definition types.
//!
//! Automata can be described with a JSON DSL:
//!
//! ```json
//! {
//!   "states": 4,
//!   "accepting": 3,
//!   "transitions": [
//!     {"from": 0, "on": "c", "to": 1},
//!     {"from": 1, "on": "a", "to": 2},
//!     {"from": 2, "on": "t", "to": 3},
//!     {"from": 3, "on": "*", "to": 3}
//!   ]
//! }
//! ```
//!
//! `on` lists every symbol that takes the transition; `"*"` stands for the
//! whole alphabet. `accepting` may be omitted, in which case state 1 is
//! accepting.

use crate::automaton::Automaton;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ALL_SYMBOLS: &str = "*";

/// Symbols labelling a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Symbols {
    /// Every symbol in the alphabet.
    All,
    /// Each listed symbol.
    Only(String),
}

impl From<String> for Symbols {
    fn from(s: String) -> Self {
        if s == ALL_SYMBOLS {
            Symbols::All
        } else {
            Symbols::Only(s)
        }
    }
}

impl From<Symbols> for String {
    fn from(symbols: Symbols) -> Self {
        match symbols {
            Symbols::All => ALL_SYMBOLS.to_string(),
            Symbols::Only(s) => s,
        }
    }
}

/// A transition in the definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// Source state(s). Can be a single state or multiple.
    #[serde(deserialize_with = "deserialize_from_states")]
    pub from: Vec<usize>,

    /// Symbols that trigger this transition.
    pub on: Symbols,

    /// Target state.
    pub to: usize,
}

fn deserialize_from_states<'de, D>(deserializer: D) -> Result<Vec<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct FromStatesVisitor;

    impl<'de> Visitor<'de> for FromStatesVisitor {
        type Value = Vec<usize>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a state index or array of state indices")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            usize::try_from(v)
                .map(|s| vec![s])
                .map_err(|_| E::custom(format!("state {} is too large", v)))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut states = Vec::new();
            while let Some(s) = seq.next_element::<usize>()? {
                states.push(s);
            }
            Ok(states)
        }
    }

    deserializer.deserialize_any(FromStatesVisitor)
}

/// Raw definition as written in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineDefinitionRaw {
    /// Number of states.
    pub states: usize,

    /// Accepting state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepting: Option<usize>,

    /// Transitions.
    #[serde(default)]
    pub transitions: Vec<TransitionSpec>,
}

/// Validated definition together with the automaton it describes.
#[derive(Debug, Clone)]
pub struct MachineDefinition {
    /// Machine name.
    pub name: String,

    /// Original raw definition.
    pub raw: MachineDefinitionRaw,

    /// CRC32C of the canonical JSON form.
    pub checksum: String,

    automaton: Automaton,
}

impl MachineDefinition {
    /// Parses and validates a definition from JSON.
    pub fn from_json(name: impl Into<String>, json: &serde_json::Value) -> Result<Self, CoreError> {
        let raw: MachineDefinitionRaw = serde_json::from_value(json.clone())?;
        Self::from_raw(name, raw)
    }

    /// Parses and validates a definition from a JSON string.
    pub fn from_json_str(name: impl Into<String>, json: &str) -> Result<Self, CoreError> {
        let raw: MachineDefinitionRaw = serde_json::from_str(json)?;
        Self::from_raw(name, raw)
    }

    /// Loads a definition from a JSON file, named after the file stem.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "machine".to_string());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(name, &content)
    }

    /// Validates raw parts and builds the automaton.
    pub fn from_raw(name: impl Into<String>, raw: MachineDefinitionRaw) -> Result<Self, CoreError> {
        let name = name.into();

        if raw.states == 0 {
            return Err(CoreError::InvalidDefinition {
                reason: "an automaton needs at least one state".to_string(),
            });
        }

        let mut automaton = Automaton::new(raw.states)?;

        for t in &raw.transitions {
            if t.from.is_empty() {
                return Err(CoreError::InvalidDefinition {
                    reason: format!("transition to {} has no source state", t.to),
                });
            }

            for &from in &t.from {
                let result = match &t.on {
                    Symbols::All => automaton.set_transition_for_all_symbols(from, t.to),
                    Symbols::Only(symbols) if symbols.is_empty() => {
                        return Err(CoreError::InvalidDefinition {
                            reason: format!("transition {} -> {} has no symbols", from, t.to),
                        });
                    }
                    Symbols::Only(symbols) => {
                        automaton.set_transition_for_symbols(from, symbols, t.to)
                    }
                };
                result.map_err(|e| CoreError::InvalidDefinition {
                    reason: format!("transition {} -> {}: {}", from, t.to, e),
                })?;
            }
        }

        if let Some(accepting) = raw.accepting {
            automaton
                .mark_accepting(accepting, true)
                .map_err(|e| CoreError::InvalidDefinition {
                    reason: format!("accepting state: {}", e),
                })?;
        }

        let json_bytes = serde_json::to_vec(&raw)?;
        let checksum = format!("{:08x}", crc32c::crc32c(&json_bytes));

        tracing::debug!(
            "built machine '{}' ({} states, checksum {})",
            name,
            raw.states,
            checksum
        );

        Ok(Self {
            name,
            raw,
            checksum,
            automaton,
        })
    }

    /// Returns the automaton built from this definition.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Consumes the definition, returning its automaton.
    pub fn into_automaton(self) -> Automaton {
        self.automaton
    }

    /// Returns the raw definition as JSON.
    pub fn to_json(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(&self.raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::Simulator;
    use std::io::Write;

    fn cat_definition() -> serde_json::Value {
        serde_json::json!({
            "states": 4,
            "accepting": 3,
            "transitions": [
                {"from": 0, "on": "c", "to": 1},
                {"from": 1, "on": "a", "to": 2},
                {"from": 2, "on": "t", "to": 3},
                {"from": 3, "on": "*", "to": 3}
            ]
        })
    }

    #[test]
    fn test_parse_definition() {
        let def = MachineDefinition::from_json("cat", &cat_definition()).unwrap();

        assert_eq!(def.name, "cat");
        assert_eq!(def.raw.states, 4);
        assert_eq!(def.automaton().size(), 4);
        assert_eq!(def.automaton().accepting_state(), 3);
        assert_eq!(def.checksum.len(), 8);
    }

    #[test]
    fn test_definition_runs() {
        let dfa = MachineDefinition::from_json("cat", &cat_definition())
            .unwrap()
            .into_automaton();
        assert!(Simulator::run(&dfa, "category"));
        assert!(!Simulator::run(&dfa, "dog"));
    }

    #[test]
    fn test_multi_source_multi_symbol() {
        let json = serde_json::json!({
            "states": 3,
            "accepting": 2,
            "transitions": [
                {"from": [0, 1], "on": "01", "to": 2}
            ]
        });
        let def = MachineDefinition::from_json("bits", &json).unwrap();
        let dfa = def.automaton();

        for state in [0, 1] {
            assert_eq!(dfa.get_transition(state, '0'), Some(2));
            assert_eq!(dfa.get_transition(state, '1'), Some(2));
        }
        assert_eq!(dfa.get_transition(2, '0'), None);
    }

    #[test]
    fn test_default_accepting_state() {
        let json = serde_json::json!({"states": 2, "transitions": []});
        let def = MachineDefinition::from_json("bare", &json).unwrap();
        assert_eq!(def.automaton().accepting_state(), 1);
    }

    #[test]
    fn test_checksum_is_stable() {
        let a = MachineDefinition::from_json("a", &cat_definition()).unwrap();
        let b = MachineDefinition::from_json("b", &cat_definition()).unwrap();
        assert_eq!(a.checksum, b.checksum);

        let mut other = cat_definition();
        other["accepting"] = serde_json::json!(2);
        let c = MachineDefinition::from_json("c", &other).unwrap();
        assert_ne!(a.checksum, c.checksum);
    }

    #[test]
    fn test_to_json_keeps_wildcard() {
        let def = MachineDefinition::from_json("cat", &cat_definition()).unwrap();
        let json = def.to_json().unwrap();
        assert_eq!(json["transitions"][3]["on"], "*");
        assert_eq!(json["transitions"][0]["from"], serde_json::json!([0]));
    }

    #[test]
    fn test_invalid_definitions() {
        let cases = [
            serde_json::json!({"states": 0}),
            serde_json::json!({"states": 2, "accepting": 2}),
            serde_json::json!({"states": 2, "transitions": [{"from": 0, "on": "a", "to": 5}]}),
            serde_json::json!({"states": 2, "transitions": [{"from": 3, "on": "a", "to": 1}]}),
            serde_json::json!({"states": 2, "transitions": [{"from": 0, "on": "A", "to": 1}]}),
            serde_json::json!({"states": 2, "transitions": [{"from": 0, "on": "", "to": 1}]}),
            serde_json::json!({"states": 2, "transitions": [{"from": [], "on": "a", "to": 1}]}),
        ];

        for json in cases {
            let result = MachineDefinition::from_json("bad", &json);
            assert!(
                matches!(result, Err(CoreError::InvalidDefinition { .. })),
                "expected invalid definition for {json}"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        let result = MachineDefinition::from_json_str("bad", "{\"states\": \"two\"}");
        assert!(matches!(result, Err(CoreError::Json(_))));

        let json = serde_json::json!({"states": 2, "transitions": [{"from": -1, "on": "a", "to": 1}]});
        assert!(matches!(
            MachineDefinition::from_json("bad", &json),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("starts-cat.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", cat_definition()).unwrap();

        let def = MachineDefinition::from_file(&path).unwrap();
        assert_eq!(def.name, "starts-cat");
        assert!(Simulator::run(def.automaton(), "cat"));

        let missing = MachineDefinition::from_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(CoreError::Io(_))));
    }
}

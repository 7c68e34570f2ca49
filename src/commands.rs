//! One-shot command execution.

use crate::catalog;
use crate::{Commands, MachineSource};
use colored::Colorize;
use rdfa_core::{Automaton, MachineDefinition, Simulator};
use serde_json::Value;
use std::path::PathBuf;

/// Executes a command and returns the formatted output.
pub fn execute(cmd: Commands) -> Result<String, Box<dyn std::error::Error>> {
    match cmd {
        Commands::Menu => unreachable!(),

        Commands::List => Ok(list()),

        Commands::Run {
            definition,
            args,
            explain,
        } => {
            let (source, input) = run_target(definition, args)?;
            let (name, dfa) = resolve(&source)?;
            let outcome = Simulator::trace(&dfa, &input);
            tracing::debug!("ran '{}' on {:?}: {}", name, input, outcome.accepted);

            let mut output = verdict(outcome.accepted);
            if explain {
                output.push('\n');
                output.push_str(&format_json(&serde_json::to_value(&outcome)?));
            }
            Ok(output)
        }

        Commands::Show { source } => {
            let (name, dfa) = resolve(&source)?;
            Ok(format!("{}\n{}", format!("Machine {}", name.cyan()).bold(), dfa))
        }
    }
}

/// Splits `run` arguments into the machine and the input string.
///
/// With a definition file the only positional is the input; otherwise the
/// first positional names the machine. A missing input is the empty string.
fn run_target(
    definition: Option<PathBuf>,
    args: Vec<String>,
) -> Result<(MachineSource, String), String> {
    let mut args = args.into_iter();
    let source = match definition {
        Some(path) => MachineSource {
            machine: None,
            definition: Some(path),
        },
        None => MachineSource {
            machine: Some(args.next().ok_or("missing machine name or number")?),
            definition: None,
        },
    };
    let input = args.next().unwrap_or_default();
    if let Some(extra) = args.next() {
        return Err(format!("unexpected argument: {}", extra));
    }
    Ok((source, input))
}

/// Builds the automaton a command refers to.
pub fn resolve(source: &MachineSource) -> Result<(String, Automaton), Box<dyn std::error::Error>> {
    if let Some(path) = &source.definition {
        let def = MachineDefinition::from_file(path)?;
        return Ok((def.name.clone(), def.into_automaton()));
    }

    let key = source.machine.as_deref().unwrap_or_default();
    let entry = catalog::find(key).ok_or_else(|| format!("unknown machine: {}", key))?;
    Ok((entry.name.to_string(), entry.build()?))
}

/// Returns the catalog listing.
pub fn list() -> String {
    let mut output = String::new();
    for (i, entry) in catalog::ENTRIES.iter().enumerate() {
        output.push_str(&format!(
            "  {} {:<16} {}\n",
            (i + 1).to_string().yellow(),
            entry.name.cyan(),
            entry.description
        ));
    }
    output
}

/// Formats a verdict line.
pub fn verdict(accepted: bool) -> String {
    if accepted {
        verdict_text(accepted).green().to_string()
    } else {
        verdict_text(accepted).red().to_string()
    }
}

pub fn verdict_text(accepted: bool) -> &'static str {
    if accepted {
        "Accept"
    } else {
        "Fail"
    }
}

fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

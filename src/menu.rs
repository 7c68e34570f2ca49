//! Interactive menu.

use crate::catalog::{self, Entry};
use crate::commands;
use crate::config::MenuConfig;
use colored::Colorize;
use rdfa_core::Simulator;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

const HELP_TEXT: &str = r#"
Available commands:
  help                  Show this help
  list                  List the automata
  <n|name>              Test an automaton; the next line is the input
  <n|name> <input>      Test an automaton on <input>
  show <n|name>         Print an automaton's transition table
  quit, exit            Exit
"#;

/// Result of one menu line.
#[derive(Debug)]
enum Step {
    Output(String),
    /// The entry was selected and needs an input line.
    ReadInput(&'static Entry),
    Quit,
}

pub fn run(config: &MenuConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Welcome! Type in the number to select which DFA you want to test".bold());
    print!("{}", commands::list());
    println!("Type 'help' for available commands.\n");

    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let mut rl: Editor<(), DefaultHistory> = Editor::with_config(rl_config)?;

    let history_path = config.history_path();
    let _ = rl.load_history(&history_path);

    let prompt = format!("{} ", config.prompt.cyan());
    loop {
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                println!("{}: {:?}", "Error".red(), err);
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match execute_menu_command(line) {
            Ok(Step::Output(output)) => println!("{}\n", output),
            Ok(Step::ReadInput(entry)) => {
                let input_prompt = format!("{} ", format!("{}:", entry.name).dimmed());
                match rl.readline(&input_prompt) {
                    Ok(input) => match evaluate(entry, input.trim()) {
                        Ok(output) => println!("{}\n", output),
                        Err(e) => println!("{}: {}\n", "Error".red(), e),
                    },
                    Err(ReadlineError::Interrupted) => println!("^C"),
                    Err(ReadlineError::Eof) => {
                        println!("^D");
                        break;
                    }
                    Err(err) => {
                        println!("{}: {:?}", "Error".red(), err);
                        break;
                    }
                }
            }
            Ok(Step::Quit) => break,
            Err(e) => println!("{}: {}\n", "Error".red(), e),
        }
    }

    let _ = rl.save_history(&history_path);
    Ok(())
}

fn execute_menu_command(line: &str) -> Result<Step, Box<dyn std::error::Error>> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or_default().to_lowercase();
    let rest = parts.next().map(str::trim);

    match cmd.as_str() {
        "help" | "?" => Ok(Step::Output(HELP_TEXT.to_string())),

        "quit" | "exit" | "q" => Ok(Step::Quit),

        "list" | "ls" => Ok(Step::Output(commands::list())),

        "show" => {
            let Some(key) = rest else {
                return Ok(Step::Output("Usage: show <n|name>".to_string()));
            };
            let entry = lookup(key)?;
            Ok(Step::Output(entry.build()?.to_string()))
        }

        _ => {
            let entry = lookup(&cmd)?;
            match rest {
                Some(input) => Ok(Step::Output(evaluate(entry, input)?)),
                None => Ok(Step::ReadInput(entry)),
            }
        }
    }
}

fn lookup(key: &str) -> Result<&'static Entry, String> {
    catalog::find(key).ok_or_else(|| format!("Unknown automaton: {}. Type 'help' for help.", key))
}

/// Runs `input` through a fresh instance of `entry`.
fn evaluate(entry: &Entry, input: &str) -> Result<String, Box<dyn std::error::Error>> {
    let dfa = entry.build()?;
    let accepted = Simulator::run(&dfa, input);
    tracing::debug!("menu run '{}' on {:?}: {}", entry.name, input, accepted);
    Ok(commands::verdict(accepted))
}

//! rdfa - table-driven DFA runner
//!
//! Runs input strings through prebuilt or JSON-defined automata, either from
//! an interactive menu or as one-shot commands.

mod catalog;
mod commands;
mod config;
mod menu;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rdfa")]
#[command(about = "Run input strings through deterministic finite automata")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, env = "RDFA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Selects the automaton a command works on.
#[derive(Args, Debug)]
pub struct MachineSource {
    /// Prebuilt machine, by name or menu number
    #[arg(required_unless_present = "definition", conflicts_with = "definition")]
    pub machine: Option<String>,

    /// JSON definition file
    #[arg(short, long)]
    pub definition: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu
    Menu,

    /// List the prebuilt machines
    List,

    /// Run an input string and print Accept or Fail
    Run {
        /// JSON definition file instead of a prebuilt machine
        #[arg(short, long)]
        definition: Option<PathBuf>,

        /// Machine (name or menu number) then the input string; with
        /// --definition, only the input string
        #[arg(value_name = "ARGS", num_args = 0..=2)]
        args: Vec<String>,

        /// Also print where and why the run ended
        #[arg(long)]
        explain: bool,
    },

    /// Print a machine's transition table
    Show {
        #[command(flatten)]
        source: MachineSource,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // An explicitly named config file must load
    let config = Config::load(cli.config.as_deref()).map_err(|e| {
        eprintln!("{}: {}", "Error".red(), e);
        e
    })?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if !config.menu.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Commands::Menu) | None => {
            menu::run(&config.menu)?;
        }
        Some(cmd) => match commands::execute(cmd) {
            Ok(output) => {
                println!("{}", output);
            }
            Err(e) => {
                eprintln!("{}: {}", "Error".red(), e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Build singly linked chains by hand, print them, and hop to the n-th node
#[derive(Parser, Debug)]
#[command(name = "hoplist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Local config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Defaults to `demo` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay the reference trace: nodes 10, 20, 30, 40 linked in order
    Demo,

    /// Build a chain from the values and print it on one line
    Print {
        /// Node values in chain order (head first)
        values: Vec<String>,
    },

    /// Build a chain from the values and print the node N hops from the head
    Get {
        /// Number of successor hops from the head
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        hops: i64,

        /// Node values in chain order (head first)
        values: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,

    /// Show the global config file location
    Path,
}

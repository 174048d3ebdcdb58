//! Command-line arguments and subcommands for the arrayops CLI.

use clap::{ArgAction, Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "arrayops",
    version,
    about = "Run pure array and string transformations on JSON input."
)]
pub struct ArrayopsArgs {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one operation and print its JSON result.
    Run {
        /// Operation name, e.g. makeMath.
        op: String,
        /// JSON array input. Read from stdin when omitted.
        input: Option<String>,
    },
    /// List all available operations.
    List {
        /// Print the list as JSON.
        #[arg(long)]
        json: bool,
    },
}

//! The arrayops command-line interface.
//!
//! Parses arguments, sets up logging, and dispatches to the operation
//! registry.

use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use serde_json::Value;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

use crate::cli::args::{ArrayopsArgs, Command};
use crate::errors::Result;
use crate::ops::OpRegistry;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = ArrayopsArgs::parse();
    init_logging(args.verbose);

    let registry = OpRegistry::with_std_ops();
    let stdout = io::stdout();
    let result = execute(&args.command, &registry, io::stdin().lock(), &mut stdout.lock());

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

/// Installs the stderr `tracing` subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore "already set" so embedding callers keep their own subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .try_init();

    debug!("arrayops started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

/// Runs one subcommand against `registry`, reading stdin from `input` and
/// writing results to `out`.
pub fn execute(
    command: &Command,
    registry: &OpRegistry,
    mut input: impl Read,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Run { op, input: inline } => {
            let text = match inline {
                Some(text) => text.clone(),
                None => {
                    let mut buf = String::new();
                    input.read_to_string(&mut buf)?;
                    buf
                }
            };
            let value: Value = serde_json::from_str(&text)?;
            let result = registry.call(op, &value)?;
            output::write_value(out, &result)
        }
        Command::List { json } => output::write_op_list(out, &registry.infos(), *json),
    }
}

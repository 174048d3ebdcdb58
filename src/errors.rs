//! Arrayops error handling.
//!
//! The pure operations never fail. Errors only arise at the edges: decoding a
//! JSON input into a typed sequence, looking up an operation by name, and the
//! command-line runner's I/O.

use miette::Diagnostic;
use thiserror::Error;

/// Convenient result alias used across the registry and CLI.
pub type Result<T> = std::result::Result<T, ArrayError>;

// ============================================================================
// INTERNAL PARSE FAILURE
// ============================================================================

/// Why a string did not yield an integer prefix.
///
/// Only `parse::parse_int_prefix` returns this. Every public operation maps it
/// to `0` before it can reach a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntError {
    #[error("no digits found in {input:?}")]
    NoDigits { input: String },
}

// ============================================================================
// EDGE ERRORS
// ============================================================================

/// The single error type surfaced by the registry and the CLI.
#[derive(Debug, Error, Diagnostic)]
pub enum ArrayError {
    #[error("Unknown operation: {name}")]
    #[diagnostic(
        code(arrayops::unknown_op),
        help("run `arrayops list` to see the available operations")
    )]
    UnknownOperation { name: String },

    #[error("Invalid input for {op}: {message}")]
    #[diagnostic(code(arrayops::input))]
    InputShape {
        op: String,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Malformed JSON: {0}")]
    #[diagnostic(
        code(arrayops::json),
        help("input must be a JSON array, e.g. [1, 2, 3] or [\"a\", \"b\"]")
    )]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    #[diagnostic(code(arrayops::io))]
    Io(#[from] std::io::Error),
}

impl ArrayError {
    /// Builds an `InputShape` error without help text.
    pub fn input(op: &str, message: impl Into<String>) -> Self {
        ArrayError::InputShape {
            op: op.to_string(),
            message: message.into(),
            help: None,
        }
    }

    /// Builds an `InputShape` error carrying a help line.
    pub fn input_with_help(op: &str, message: impl Into<String>, help: impl Into<String>) -> Self {
        ArrayError::InputShape {
            op: op.to_string(),
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

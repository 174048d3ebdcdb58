//! Pure array and string transformations.
//!
//! The typed functions are re-exported at the crate root. The [`ops`] registry
//! exposes the same functions by name over `serde_json::Value`, which is what
//! the `arrayops` binary drives.

pub use crate::errors::{ArrayError, ParseIntError, Result};
pub use crate::ops::numbers::{book_end_list, inject_positive, make_math, triple_numbers};
pub use crate::ops::strings::{
    all_rgb, count_short_words, remove_dollars, shout_if_exclaiming, strings_to_integers,
};
pub use crate::ops::{OpInfo, OpRegistry};

pub mod cli;
pub mod errors;
pub mod ops;
pub mod parse;

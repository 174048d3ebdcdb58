//! # Arrayops Operation System
//!
//! Every transformation lives in one of two domain modules as a plain typed
//! function, plus a JSON adapter constant that the registry dispatches to.
//!
//! ## Module Structure
//!
//! - **`helpers`**: JSON decoding/encoding shared by all adapters
//! - **`numbers`**: `bookEndList`, `tripleNumbers`, `makeMath`, `injectPositive`
//! - **`strings`**: `stringsToIntegers`, `removeDollars`, `shoutIfExclaiming`,
//!   `countShortWords`, `allRGB`

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::{ArrayError, Result};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Adapter signature: decode the JSON input, run the operation, encode the
/// result.
pub type OpFn = fn(input: &Value) -> Result<Value>;

/// A registered operation.
#[derive(Debug, Clone, Copy)]
pub struct Op {
    pub func: OpFn,
    pub summary: &'static str,
}

/// Name and summary of a registered operation, as printed by `arrayops list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpInfo {
    pub name: String,
    pub summary: String,
}

/// Registry for all operations, inspectable at runtime.
#[derive(Debug, Default)]
pub struct OpRegistry {
    ops: HashMap<String, Op>,
}

impl OpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every standard operation.
    pub fn with_std_ops() -> Self {
        let mut registry = Self::new();
        register_all_ops(&mut registry);
        registry
    }

    pub fn get(&self, name: &str) -> Option<&Op> {
        self.ops.get(name)
    }

    /// Operation names in sorted order.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ops.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name/summary pairs in sorted order.
    pub fn infos(&self) -> Vec<OpInfo> {
        self.list()
            .into_iter()
            .filter_map(|name| {
                let summary = self.ops.get(&name)?.summary.to_string();
                Some(OpInfo { name, summary })
            })
            .collect()
    }

    pub fn register(&mut self, name: &str, func: OpFn, summary: &'static str) {
        self.ops.insert(name.to_string(), Op { func, summary });
    }

    pub fn has(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Runs the named operation on a JSON input.
    pub fn call(&self, name: &str, input: &Value) -> Result<Value> {
        let op = self.get(name).ok_or_else(|| ArrayError::UnknownOperation {
            name: name.to_string(),
        })?;
        debug!(op = name, "dispatching operation");
        let output = (op.func)(input)?;
        debug!(op = name, %output, "operation finished");
        Ok(output)
    }
}

// ============================================================================
// DOMAIN MODULES
// ============================================================================

pub mod helpers;

pub mod numbers;
pub mod strings;

/// Registers every standard operation with the given registry.
pub fn register_all_ops(registry: &mut OpRegistry) {
    numbers::register_number_ops(registry);
    strings::register_string_ops(registry);
}

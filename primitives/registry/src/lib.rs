#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Operation Registry — a lightweight database for operation definitions.
//!
//! This crate provides the in-memory registry that stores one snapshot's
//! worth of operation definitions, plus the acquisition policy that fills
//! it: an explicit text snapshot, the live runtime registry (with recovery
//! to a bundled snapshot), or the bundled snapshot directly.

pub mod loader;

use std::collections::HashMap;

use ir::OpDef;

pub use loader::{
    load, load_bundled, load_live, load_snapshot_file, parse_snapshot, LoadError, RegistrySource,
    SourceError,
};

/// A registry of operation definitions.
///
/// Iteration order is the order definitions were loaded in; the name lookup
/// map silently shadows duplicates last-write-wins, so a duplicated name
/// iterates twice but always resolves to its final definition.
#[derive(Debug, Default)]
pub struct OpRegistry {
    ops: Vec<OpDef>,
    by_name: HashMap<String, usize>,
}

impl OpRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self { Self::default() }

    /// Build a registry from definitions in snapshot order.
    pub fn from_ops(ops: Vec<OpDef>) -> Self {
        let mut reg = Self::new();
        for op in ops {
            reg.insert(op);
        }
        reg
    }

    /// Append a definition, shadowing any earlier definition of the same name.
    pub fn insert(&mut self, op: OpDef) {
        self.by_name.insert(op.name.clone(), self.ops.len());
        self.ops.push(op);
    }

    /// All definitions in registry order.
    pub fn ops(&self) -> &[OpDef] { &self.ops }
}

/// Read-only interface to the [`OpRegistry`].
///
/// Provides a clean API for querying operation definitions without exposing
/// mutation capabilities.
pub trait RegistryReader {
    /// All operation names, in registry order (duplicates included).
    fn names(&self) -> Vec<&str>;

    /// Get a definition by name.
    ///
    /// Returns the last-loaded definition when the name was duplicated, or
    /// `None` if no definition with the given name exists.
    fn get(&self, name: &str) -> Option<&OpDef>;

    /// Total number of definitions in the registry.
    fn op_count(&self) -> usize;
}

impl RegistryReader for OpRegistry {
    fn names(&self) -> Vec<&str> { self.ops.iter().map(|op| op.name.as_str()).collect() }

    fn get(&self, name: &str) -> Option<&OpDef> {
        self.by_name.get(name).map(|&idx| &self.ops[idx])
    }

    fn op_count(&self) -> usize { self.ops.len() }
}

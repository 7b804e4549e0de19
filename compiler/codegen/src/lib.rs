#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Code generation for registry operation wrappers.
//!
//! This crate turns plan records into generated Rust modules: per-group
//! operation-name constants, per-group typed wrapper functions, and the
//! coverage report that cross-checks what actually landed in the generated
//! files. It focuses solely on emission; plan building and registry
//! acquisition live in companion crates.

pub mod coverage;
pub mod names;
pub mod utils;
pub mod wrappers;

use thiserror::Error;

pub use coverage::{emit_coverage, COVERAGE_FILE_NAME};
pub use names::emit_names;
pub use wrappers::{emit_wrappers, EmitStats, ALWAYS_EMIT_OPS, EMIT_GROUPS};

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Underlying I/O error while reading or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Formatting error when building generated source.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
    /// Regex compilation error used during coverage scanning.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

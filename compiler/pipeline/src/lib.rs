#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that turns a registry snapshot into generated
//! wrapper modules by orchestrating acquisition, metadata scanning, plan
//! building, and emission.
//!
//! The stages run strictly in sequence over immutable intermediate values:
//!
//! 1. `registry` - acquire the operation registry (snapshot, live, or
//!    bundled)
//! 2. `endpoints` - scan curated endpoint metadata, when configured
//! 3. `plan` - join registry and metadata into canonical plan records
//! 4. `codegen` - write the plan document, name indexes, wrappers, and the
//!    coverage report
//!
//! The pipeline either completes or aborts with one descriptive error; no
//! partial-success status is modeled. A failure after partial emission
//! leaves already-written files in place.

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the generator pipeline.
///
/// One variant per failure kind; every stage error is wrapped transparently
/// so the stage's own message reaches the user unchanged.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// I/O error while creating directories or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Error acquiring the operation registry.
    #[error(transparent)]
    Registry(#[from] registry::LoadError),
    /// Error scanning endpoint metadata.
    #[error(transparent)]
    Endpoints(#[from] endpoints::ScanError),
    /// Error serializing the plan document.
    #[error(transparent)]
    Plan(#[from] plan::PlanError),
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
}

// Module declarations
pub mod orchestration;

// Re-export public API from orchestration module
pub use orchestration::run;

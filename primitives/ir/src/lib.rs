#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! opgen Intermediate Representation (IR)
//!
//! This crate defines the core IR structures that encapsulate a tensor
//! operation registry at different stages of the generation pipeline: raw
//! operation definitions as decoded from a registry snapshot, curated
//! endpoint metadata, and the canonical per-operation plan records consumed
//! by emission and coverage.

pub mod op_ir;

// Re-export the main IR types for convenience
pub use op_ir::*;

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Semantic classification for registry operations.
//!
//! When curated endpoint metadata does not place an operation into a domain
//! group, the heuristic grouper here decides from the operation name alone.

/// Shared name-based grouping used by the plan builder
pub mod grouper;

pub use grouper::classify;

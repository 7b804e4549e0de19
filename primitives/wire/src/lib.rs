#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Minimal wire-format decoder for serialized operation registries.
//!
//! The registry snapshot is a stream of `(field number, wire type)` tagged
//! fields; the only interpreted top-level field is the repeated
//! length-delimited operation-definition message. Everything this decoder
//! does not understand is skipped generically by wire type, so unknown or
//! future fields can never desynchronize the known fields that follow.
//!
//! Full wire-format coverage is a non-goal; only the varint, 64-bit,
//! length-delimited, group, and 32-bit forms needed to walk a registry are
//! implemented.

pub mod decoder;
#[cfg(feature = "test-utils")]
pub mod encode;

pub use decoder::{decode_registry, DecodeError};

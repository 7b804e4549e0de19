#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Quote-and-brace-aware scanning over semi-structured text snapshots.
//!
//! Registry text snapshots and endpoint-metadata files are made of labeled
//! `label { ... }` blocks whose field values are quoted strings. A literal
//! `{` or `}` inside a quoted value must never perturb block boundaries, so
//! every scan here runs one shared state machine: an in-string flag toggled
//! by unescaped quotes, an escape flag set by a backslash inside a string,
//! and a brace depth counted only outside strings.
//!
//! Grammar-complete parsing of the snapshot format is a non-goal; only the
//! block and field extraction the pipeline needs is implemented.

pub mod scanner;

pub use scanner::{find_top_level_blocks, match_brace, top_level_field};

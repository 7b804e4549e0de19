//! Endpoint-metadata file discovery and parsing.
//!
//! Files follow the `api_def_*.pbtxt` naming convention and hold at most one
//! top-level record block:
//!
//! ```text
//! op {
//!   graph_op_name: "LogicalAnd"
//!   endpoint { name: "math.logical_and" }
//!   endpoint { name: "logical_and" }
//!   summary: "Returns the truth value of x AND y element-wise."
//! }
//! ```
//!
//! Any read failure aborts the whole scan; the curated set is small and a
//! partially scanned index would silently misclassify operations.

use std::path::{Path, PathBuf};

use ir::EndpointRecord;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors raised while scanning an endpoint-metadata directory.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The configured metadata path is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    /// A metadata file could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Directory traversal failed.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

/// Load all `api_def_*.pbtxt` records under `dir`, recursively.
///
/// Traversal order is sorted by file name so record merge order is stable
/// across hosts.
pub fn scan_dir(dir: &Path) -> Result<Vec<EndpointRecord>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if file_name.starts_with("api_def_") && file_name.ends_with(".pbtxt") {
            paths.push(entry.into_path());
        }
    }

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let text = std::fs::read_to_string(&path)
            .map_err(|source| ScanError::Io { path: path.clone(), source })?;
        if let Some(record) = parse_record(&text) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Parse a single endpoint-metadata file.
///
/// Returns `None` when the file has no record block or the block carries no
/// operation name.
pub fn parse_record(text: &str) -> Option<EndpointRecord> {
    let block_range = textscan::find_top_level_blocks(text, "op").into_iter().next()?;
    let block = &text[block_range];

    let op_name = textscan::top_level_field(block, "graph_op_name")?;
    if op_name.is_empty() {
        return None;
    }

    let mut endpoints = Vec::new();
    for ep_range in textscan::find_top_level_blocks(block, "endpoint") {
        let ep_block = &block[ep_range.clone()];
        if let Some(name) = textscan::top_level_field(ep_block, "name") {
            if !name.is_empty() {
                endpoints.push(name);
            }
        }
    }

    let summary = textscan::top_level_field(block, "summary").filter(|s| !s.is_empty());

    Some(EndpointRecord { op_name, endpoints, summary })
}

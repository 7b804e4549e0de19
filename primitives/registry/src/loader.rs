//! Registry acquisition.
//!
//! Three tiers, attempted in order and short-circuiting on first success:
//!
//! 1. An explicitly configured text snapshot path.
//! 2. The live runtime registry (serialized bytes from a [`RegistrySource`]),
//!    recovering to the bundled snapshot on any failure.
//! 3. The bundled snapshot.
//!
//! Failures in the final selected tier are terminal; only the live tier is
//! ever recovered.

use std::path::{Path, PathBuf};

use ir::OpDef;
use thiserror::Error;

use crate::OpRegistry;

/// Snapshot shipped with the crate, used when no other tier is available.
const BUNDLED_SNAPSHOT: &str = include_str!("../resources/ops.pbtxt");

/// Supplies the serialized registry bytes from a live runtime.
///
/// This is the only thing the loader asks of the execution layer; hosts
/// without a linked runtime simply pass no source and get the bundled
/// snapshot.
pub trait RegistrySource {
    /// Fetch the serialized registry for the running runtime.
    fn registry_bytes(&self) -> Result<Vec<u8>, SourceError>;
}

/// Errors raised by a [`RegistrySource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// The live registry could not be fetched.
    #[error("registry source unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while acquiring a registry.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The configured snapshot path does not exist.
    #[error("ops snapshot not found at {0}")]
    SnapshotNotFound(PathBuf),
    /// The snapshot file could not be read.
    #[error("failed to read ops snapshot {path}: {source}")]
    Io {
        /// Snapshot path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The live registry bytes did not decode.
    #[error(transparent)]
    Decode(#[from] wire::DecodeError),
    /// The live registry could not be fetched.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Parse a text snapshot into a registry.
///
/// Only `name` at the immediate sub-level of each top-level `op { ... }`
/// block is read; blocks without a name are skipped. Definitions from this
/// path carry names only.
pub fn parse_snapshot(text: &str) -> OpRegistry {
    let mut reg = OpRegistry::new();
    for range in textscan::find_top_level_blocks(text, "op") {
        let block = &text[range];
        if let Some(name) = textscan::top_level_field(block, "name") {
            if !name.is_empty() {
                reg.insert(OpDef::named(name));
            }
        }
    }
    reg
}

/// Load a registry from a text snapshot file.
pub fn load_snapshot_file(path: &Path) -> Result<OpRegistry, LoadError> {
    if !path.exists() {
        return Err(LoadError::SnapshotNotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    Ok(parse_snapshot(&text))
}

/// Load and decode the live runtime registry.
pub fn load_live(source: Option<&dyn RegistrySource>) -> Result<OpRegistry, LoadError> {
    let source = source
        .ok_or_else(|| SourceError::Unavailable("no runtime registry source configured".into()))?;
    let bytes = source.registry_bytes()?;
    let ops = wire::decode_registry(&bytes)?;
    Ok(OpRegistry::from_ops(ops))
}

/// Load the bundled snapshot.
pub fn load_bundled() -> OpRegistry { parse_snapshot(BUNDLED_SNAPSHOT) }

/// Acquire a registry with the three-tier policy.
pub fn load(
    snapshot: Option<&Path>,
    prefer_live: bool,
    source: Option<&dyn RegistrySource>,
    verbose: bool,
) -> Result<OpRegistry, LoadError> {
    if let Some(path) = snapshot {
        if verbose {
            logging::trace("REGISTRY", &format!("loading ops snapshot: {}", path.display()));
        }
        return load_snapshot_file(path);
    }
    if prefer_live {
        match load_live(source) {
            Ok(reg) => {
                if verbose {
                    logging::trace("REGISTRY", "loaded live runtime registry");
                }
                return Ok(reg);
            }
            Err(e) => {
                if verbose {
                    logging::trace(
                        "REGISTRY",
                        &format!("live registry failed ({}), falling back to bundled snapshot", e),
                    );
                }
                return Ok(load_bundled());
            }
        }
    }
    if verbose {
        logging::trace("REGISTRY", "using bundled ops snapshot");
    }
    Ok(load_bundled())
}

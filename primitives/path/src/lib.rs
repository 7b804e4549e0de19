// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Filesystem utilities for output scaffolding and durable writes.
//!
//! Every generated artifact is written atomically: the contents land in a
//! temporary file in the destination directory, which is then renamed over
//! the target path. The output directory as a whole is not transactional; a
//! failed run leaves previously written files in place.

use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

/// Create `path` and its parents if missing.
///
/// Fails when `path` exists and is not a directory.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("out path exists and is not a directory: {}", path.display()),
            ));
        }
        return Ok(());
    }
    std::fs::create_dir_all(path)
}

/// Write `contents` to `path` with temp-then-rename semantics.
///
/// The temporary file is created in the target's parent directory so the
/// final rename never crosses a filesystem boundary.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(parent)?;
    io::Write::write_all(&mut tmp, contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_atomic_creates_and_replaces_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let target = dir.path().join("plan.json");

        write_atomic(&target, "first").expect("first write");
        assert_eq!(std::fs::read_to_string(&target).expect("read back"), "first");

        write_atomic(&target, "second").expect("second write");
        assert_eq!(std::fs::read_to_string(&target).expect("read back"), "second");
    }

    #[test]
    fn ensure_dir_is_idempotent_and_rejects_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).expect("create nested");
        ensure_dir(&nested).expect("idempotent");

        let file = dir.path().join("occupied");
        std::fs::write(&file, "x").expect("write file");
        assert!(ensure_dir(&file).is_err());
    }
}

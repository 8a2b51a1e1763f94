//! Write the rendered unit file.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};

/// Replace whatever sits at `path` with `text`.
///
/// The old entry is unlinked first and the new file created exclusively,
/// so an alias symlink left at this name by another service is replaced
/// rather than written through.
pub fn emit(path: &Path, text: &str) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => debug!("Removed previous {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        // open below reports anything that matters
        Err(e) => debug!("Could not remove {}: {}", path.display(), e),
    }

    let mut f = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| ConvertError::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;

    f.write_all(text.as_bytes())
        .and_then(|()| f.flush())
        .map_err(|source| ConvertError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("myd.service");
        fs::write(&path, "stale").unwrap();

        emit(&path, "fresh\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_replaces_symlink_instead_of_following_it() {
        let dir = tempfile::tempdir().unwrap();
        let other = dir.path().join("other.service");
        let path = dir.path().join("alias.service");
        fs::write(&other, "other unit").unwrap();
        std::os::unix::fs::symlink(&other, &path).unwrap();

        emit(&path, "own unit").unwrap();

        assert_eq!(fs::read_to_string(&other).unwrap(), "other unit");
        assert!(!fs::symlink_metadata(&path).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&path).unwrap(), "own unit");
    }

    #[test]
    fn test_missing_directory_is_output_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("myd.service");

        let err = emit(&path, "x").unwrap_err();
        assert!(matches!(err, ConvertError::OutputOpen { .. }), "got {err}");
    }
}

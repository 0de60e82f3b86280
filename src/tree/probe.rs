//! Root path validation

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{TreeError, TreeResult};

use super::metadata::EntryMetadata;

/// Check that `path` is a directory the walk can start from and return its metadata.
///
/// Symlinks are followed, so a link to a directory is a valid root.
pub fn validate(path: &Path) -> TreeResult<EntryMetadata> {
    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TreeError::NotFound(path.to_path_buf()),
        _ => TreeError::AccessError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if !meta.is_dir() {
        return Err(TreeError::NotADirectory(path.to_path_buf()));
    }

    let metadata = EntryMetadata::from_fs(&meta);
    if !metadata.is_readable() {
        return Err(TreeError::PermissionDenied(path.to_path_buf()));
    }
    Ok(metadata)
}

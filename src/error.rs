//! Error types for tree building and rendering.
//!
//! Only the root probe and unexpected directory read failures are errors.
//! A descendant directory that cannot be read is not an error at all; it is
//! recorded on its node and rendered with an inline marker.

use std::io;
use std::path::PathBuf;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The root path does not exist.
    #[error("cannot access '{}': no such file or directory", .0.display())]
    NotFound(PathBuf),

    /// The root path exists but could not be examined.
    #[error("cannot access '{}': {source}", path.display())]
    AccessError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The root path is not a directory.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The root directory lacks owner-read permission.
    #[error("cannot open '{}': permission denied", .0.display())]
    PermissionDenied(PathBuf),

    /// A directory passed the permission check but could not be listed.
    #[error("error reading directory '{}': {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing rendered output failed.
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

impl TreeError {
    /// True for the errors raised while validating the root path.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TreeError::NotFound(_)
                | TreeError::AccessError { .. }
                | TreeError::NotADirectory(_)
                | TreeError::PermissionDenied(_)
        )
    }
}

/// Convenience alias used throughout the crate.
pub type TreeResult<T> = Result<T, TreeError>;

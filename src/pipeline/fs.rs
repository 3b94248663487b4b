//! File system helpers for the pipeline.

use std::{io, path::Path};
use tokio::fs;

/// Removes the directory and its contents if it exists.
///
/// A path that is already absent is success, not an error, so repeated runs
/// start from the same clean state.
pub async fn remove_tree(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e),
    }
}

/// Creates a single directory at the given path.
///
/// The pipeline only calls this after removing the path, so an
/// `AlreadyExists` result means another process raced us and is surfaced
/// as the error it is.
pub async fn create_dir(path: &Path) -> io::Result<()> {
    fs::create_dir(path).await
}

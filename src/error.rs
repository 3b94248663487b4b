//! Error types for the build pipeline.
//!
//! Each pipeline step has its own failure variant so callers can tell which
//! step aborted the run, and [`BuildError::exit_code`] turns a failure into
//! the process exit status the pipeline's callers consume.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Main error type for all pipeline operations.
///
/// Every failure is fatal to the run: the pipeline stops at the failing step
/// and nothing is retried or suppressed.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Recursive delete of the build or distribution directory failed (Steps 1-2)
    #[error("failed to remove {}: {source}", path.display())]
    Cleanup {
        /// Directory the pipeline tried to remove
        path: PathBuf,
        /// Underlying filesystem error
        source: std::io::Error,
    },

    /// Creating the distribution directory failed (Step 3)
    #[error("failed to create {}: {source}", path.display())]
    Create {
        /// Directory the pipeline tried to create
        path: PathBuf,
        /// Underlying filesystem error
        source: std::io::Error,
    },

    /// The packaging tool could not be launched at all (Step 4)
    #[error("failed to launch {command}: {source}")]
    Spawn {
        /// Program the pipeline tried to execute
        command: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// The packaging tool ran but exited with non-success status (Step 4)
    #[error("{command} exited with status {}", code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    Packaging {
        /// Program that failed
        command: String,
        /// The tool's exit code, if it exited normally
        code: Option<i32>,
    },
}

impl BuildError {
    /// Process exit status for this failure.
    ///
    /// Packaging failures propagate the tool's own exit code. Filesystem
    /// failures propagate the OS error code where one exists. Everything
    /// else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Packaging { code, .. } => code.unwrap_or(1),
            Self::Cleanup { source, .. }
            | Self::Create { source, .. }
            | Self::Spawn { source, .. } => source.raw_os_error().unwrap_or(1),
        }
    }

    /// Name of the pipeline step this error aborted, for operator-facing messages.
    pub fn step(&self) -> &'static str {
        match self {
            Self::Cleanup { .. } => "cleanup",
            Self::Create { .. } => "create output directory",
            Self::Spawn { .. } | Self::Packaging { .. } => "packaging",
        }
    }
}

//! Build pipeline for producing a single-file executable artifact
//!
//! This library prepares a clean output area and drives an external packaging
//! tool (PyInstaller by default) against an application entry point:
//! - removes stale build and distribution directories
//! - recreates the distribution directory empty
//! - invokes the packaging tool in single-file mode and propagates its status
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod notify;
pub mod pipeline;
pub mod settings;

// Re-export commonly used types
pub use error::{BuildError, Result};
pub use pipeline::BuildPipeline;
pub use settings::{PipelineSettings, SettingsBuilder};

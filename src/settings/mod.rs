//! Pipeline configuration.
//!
//! All paths the pipeline touches are resolved once, up front, into a
//! [`PipelineSettings`] value constructed through [`SettingsBuilder`]. The
//! pipeline itself never consults the ambient working directory.

mod builder;

pub use builder::SettingsBuilder;

use std::path::{Path, PathBuf};

/// Default name of the packaging tool's transient work directory.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Default name of the final-output directory.
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Default entry-point file the packaging tool is pointed at.
pub const DEFAULT_ENTRY_POINT: &str = "app.py";

/// Default packaging tool program.
pub const DEFAULT_PACKAGER: &str = "pyinstaller";

/// Resolved configuration for one pipeline run.
///
/// Construct through [`SettingsBuilder`]:
///
/// ```no_run
/// use onedist::settings::SettingsBuilder;
///
/// # fn example() -> anyhow::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/path/to/app")
///     .artifact_name("myapp")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub(crate) build_dir: PathBuf,
    pub(crate) dist_dir: PathBuf,
    pub(crate) entry_point: PathBuf,
    pub(crate) artifact_name: String,
    pub(crate) packager: String,
}

impl PipelineSettings {
    /// The packaging tool's transient work directory, removed at pipeline start.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// The final-output directory, recreated empty before packaging runs.
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// The application source file handed to the packaging tool as input.
    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    /// Name the packaging tool gives the produced executable.
    pub fn artifact_name(&self) -> &str {
        &self.artifact_name
    }

    /// Program name or path of the external packaging tool.
    pub fn packager(&self) -> &str {
        &self.packager
    }
}

//! Builder for constructing PipelineSettings.

use super::{
    DEFAULT_BUILD_DIR, DEFAULT_DIST_DIR, DEFAULT_ENTRY_POINT, DEFAULT_PACKAGER, PipelineSettings,
};
use anyhow::{Context, bail};
use std::path::{Path, PathBuf};

/// Builder for [`PipelineSettings`].
///
/// Relative paths are resolved against the project root; absolute paths are
/// taken as-is. The artifact name defaults to the entry point's file stem,
/// which matches what the packaging tool would pick on its own.
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    build_dir: Option<PathBuf>,
    dist_dir: Option<PathBuf>,
    entry_point: Option<PathBuf>,
    artifact_name: Option<String>,
    packager: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder with all defaults in place.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the directory all relative paths are resolved against.
    ///
    /// Default: the process working directory (`.`).
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the packaging tool's work directory.
    ///
    /// Default: `build` under the project root.
    pub fn build_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the final-output directory.
    ///
    /// Default: `dist` under the project root.
    pub fn dist_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dist_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the application entry-point file.
    ///
    /// Default: `app.py` under the project root.
    pub fn entry_point<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.entry_point = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the artifact name passed to the packaging tool.
    ///
    /// Default: the entry point's file stem.
    pub fn artifact_name<S: Into<String>>(mut self, name: S) -> Self {
        self.artifact_name = Some(name.into());
        self
    }

    /// Sets the packaging tool program (a name looked up on PATH, or a path).
    ///
    /// Default: `pyinstaller`.
    pub fn packager<S: Into<String>>(mut self, program: S) -> Self {
        self.packager = Some(program.into());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if no artifact name was given and none can be derived
    /// from the entry-point file name, or if the packager program is empty.
    pub fn build(self) -> anyhow::Result<PipelineSettings> {
        let root = self.project_root.unwrap_or_else(|| PathBuf::from("."));
        let resolve = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                root.join(path)
            }
        };

        let build_dir = resolve(
            self.build_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR)),
        );
        let dist_dir = resolve(
            self.dist_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
        );
        let entry_point = resolve(
            self.entry_point
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRY_POINT)),
        );

        let artifact_name = match self.artifact_name {
            Some(name) if !name.is_empty() => name,
            Some(_) => bail!("artifact name cannot be empty"),
            None => entry_point
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
                .with_context(|| {
                    format!(
                        "cannot derive an artifact name from entry point {}",
                        entry_point.display()
                    )
                })?,
        };

        let packager = self
            .packager
            .unwrap_or_else(|| DEFAULT_PACKAGER.to_string());
        if packager.is_empty() {
            bail!("packager program cannot be empty");
        }

        Ok(PipelineSettings {
            build_dir,
            dist_dir,
            entry_point,
            artifact_name,
            packager,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_resolve_under_project_root() {
        let settings = SettingsBuilder::new()
            .project_root("/srv/app")
            .build()
            .unwrap();
        assert_eq!(settings.build_dir(), Path::new("/srv/app/build"));
        assert_eq!(settings.dist_dir(), Path::new("/srv/app/dist"));
        assert_eq!(settings.entry_point(), Path::new("/srv/app/app.py"));
        assert_eq!(settings.artifact_name(), "app");
        assert_eq!(settings.packager(), "pyinstaller");
    }

    #[test]
    fn absolute_overrides_ignore_project_root() {
        let settings = SettingsBuilder::new()
            .project_root("/srv/app")
            .dist_dir("/var/out")
            .entry_point("/srv/app/main.py")
            .build()
            .unwrap();
        assert_eq!(settings.dist_dir(), Path::new("/var/out"));
        assert_eq!(settings.artifact_name(), "main");
    }

    #[test]
    fn empty_artifact_name_is_rejected() {
        let result = SettingsBuilder::new().artifact_name("").build();
        assert!(result.is_err());
    }
}

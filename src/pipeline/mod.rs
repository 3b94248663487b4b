//! Build pipeline orchestration.
//!
//! This module provides the [`BuildPipeline`] orchestrator that runs the
//! four-step build sequence: clean the build directory, clean the
//! distribution directory, recreate the distribution directory, invoke the
//! packaging tool. Steps run strictly in order and the first failure aborts
//! the run with the failing step's error.

mod fs;
pub mod packager;

use crate::error::{BuildError, Result};
use crate::settings::PipelineSettings;
use packager::PackagerCommand;

/// Build pipeline orchestrator.
///
/// Guarantees that at the moment packaging is invoked the distribution
/// directory exists and is empty and the build directory does not exist.
/// On failure, later steps never execute; on success the distribution
/// directory contains exactly what the packaging tool wrote there.
///
/// # Examples
///
/// ```no_run
/// use onedist::pipeline::BuildPipeline;
/// use onedist::settings::SettingsBuilder;
///
/// # async fn example() -> anyhow::Result<()> {
/// let settings = SettingsBuilder::new().project_root(".").build()?;
/// BuildPipeline::new(settings).run().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BuildPipeline {
    settings: PipelineSettings,
}

impl BuildPipeline {
    /// Creates a pipeline for the given settings.
    pub fn new(settings: PipelineSettings) -> Self {
        Self { settings }
    }

    /// The settings this pipeline runs with.
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Runs the pipeline to completion or first failure.
    ///
    /// No retries and no partial success: either all four steps complete or
    /// the error identifies the step that aborted the run.
    pub async fn run(&self) -> Result<()> {
        self.clean_build_dir().await?;
        self.clean_dist_dir().await?;
        self.create_dist_dir().await?;
        self.package().await
    }

    /// Step 1: remove the packaging tool's work directory from any prior run.
    async fn clean_build_dir(&self) -> Result<()> {
        let path = self.settings.build_dir();
        log::info!("Cleaning build directory: {}", path.display());

        fs::remove_tree(path).await.map_err(|e| BuildError::Cleanup {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Step 2: remove the previous distribution directory.
    async fn clean_dist_dir(&self) -> Result<()> {
        let path = self.settings.dist_dir();
        log::info!("Cleaning distribution directory: {}", path.display());

        fs::remove_tree(path).await.map_err(|e| BuildError::Cleanup {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Step 3: create the distribution directory fresh.
    async fn create_dist_dir(&self) -> Result<()> {
        let path = self.settings.dist_dir();
        log::info!("Creating distribution directory: {}", path.display());

        fs::create_dir(path).await.map_err(|e| BuildError::Create {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Step 4: run the packaging tool and propagate its exit status.
    async fn package(&self) -> Result<()> {
        let command = PackagerCommand::from_settings(&self.settings);
        packager::detect(command.program());

        log::info!(
            "Packaging {} into {}",
            self.settings.entry_point().display(),
            self.settings.dist_dir().display()
        );
        log::debug!("Invoking {} {:?}", command.program(), command.args());

        let status = command.status().await?;
        if !status.success() {
            return Err(BuildError::Packaging {
                command: command.program().to_string(),
                code: status.code(),
            });
        }

        log::info!(
            "✓ Packaged {} into {}",
            self.settings.artifact_name(),
            self.settings.dist_dir().display()
        );
        Ok(())
    }
}

//! Packaging tool invocation.
//!
//! Builds the argument list for the external packaging tool in one place so
//! every run issues the same deterministic invocation, and runs the tool as a
//! blocking subprocess whose exit status is the only output consumed.

use crate::error::{BuildError, Result};
use crate::settings::PipelineSettings;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitStatus;

/// One invocation of the external packaging tool.
///
/// The argument shape follows the PyInstaller CLI: single-file output mode,
/// an explicit artifact name, the distribution directory as output target,
/// and the build directory as the tool's work and spec path so all of its
/// intermediates land where the next run's cleanup expects them.
pub struct PackagerCommand {
    program: String,
    args: Vec<OsString>,
}

impl PackagerCommand {
    /// Builds the invocation for the given settings.
    pub fn from_settings(settings: &PipelineSettings) -> Self {
        let mut args: Vec<OsString> = vec![
            "--onefile".into(),
            "--name".into(),
            settings.artifact_name().into(),
            "--distpath".into(),
            settings.dist_dir().into(),
            "--workpath".into(),
            settings.build_dir().into(),
            "--specpath".into(),
            settings.build_dir().into(),
        ];
        args.push(settings.entry_point().into());

        Self {
            program: settings.packager().to_string(),
            args,
        }
    }

    /// The program this command will execute.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The argument list, for logging and tests.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Runs the tool and waits for it to exit.
    ///
    /// Stdout and stderr are inherited so the tool's own progress reaches the
    /// operator; only the exit status is consumed programmatically. There is
    /// no timeout: the pipeline waits as long as the tool runs.
    pub async fn status(&self) -> Result<ExitStatus> {
        tokio::process::Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .map_err(|e| BuildError::Spawn {
                command: self.program.clone(),
                source: e,
            })
    }
}

/// Looks the packaging tool up on PATH.
///
/// Purely diagnostic: a missing tool is reported here for the operator but
/// still surfaces as the natural spawn error when the pipeline reaches the
/// packaging step.
pub fn detect(program: &str) -> Option<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Found {} at: {}", program, path.display());
            Some(path)
        }
        Err(e) => {
            log::warn!("{} not found in PATH: {}", program, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsBuilder;

    #[test]
    fn command_shape_is_single_file_with_explicit_paths() {
        let settings = SettingsBuilder::new()
            .project_root("/srv/app")
            .artifact_name("configurator")
            .build()
            .unwrap();
        let cmd = PackagerCommand::from_settings(&settings);

        assert_eq!(cmd.program(), "pyinstaller");
        let args: Vec<String> = cmd
            .args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "--onefile",
                "--name",
                "configurator",
                "--distpath",
                "/srv/app/dist",
                "--workpath",
                "/srv/app/build",
                "--specpath",
                "/srv/app/build",
                "/srv/app/app.py",
            ]
        );
    }
}

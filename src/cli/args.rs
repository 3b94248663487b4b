//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Single-file executable build pipeline
#[derive(Parser, Debug)]
#[command(
    name = "onedist",
    version,
    about = "Cleans the output area and packages an application entry point into a single-file executable",
    long_about = "Runs a four-step build pipeline: remove the stale build directory, remove the
stale distribution directory, recreate the distribution directory empty, then
invoke the packaging tool in single-file mode against the entry point.

Usage:
  onedist
  onedist --project-root ./myapp --entry-point main.py --name myapp
  onedist --packager pyinstaller --non-interactive

Exit code 0 = all four steps completed; otherwise the failing step's status
code (the packaging tool's own exit code when the tool fails)."
)]
pub struct Args {
    /// Directory the build, dist, and entry-point paths are resolved against
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Application entry-point file handed to the packaging tool
    #[arg(short, long, value_name = "FILE", default_value = "app.py")]
    pub entry_point: PathBuf,

    /// Artifact name for the produced executable (default: entry-point stem)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// External packaging tool program
    #[arg(long, value_name = "PROGRAM", default_value = "pyinstaller")]
    pub packager: String,

    /// Work directory the packaging tool uses for intermediates
    #[arg(long, value_name = "DIR", default_value = "build")]
    pub build_dir: PathBuf,

    /// Output directory the artifact is written into
    #[arg(long, value_name = "DIR", default_value = "dist")]
    pub dist_dir: PathBuf,

    /// Never pause for acknowledgment on failure (for automation)
    #[arg(long)]
    pub non_interactive: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.packager.trim().is_empty() {
            return Err("Packager program cannot be empty".to_string());
        }

        if self.entry_point.as_os_str().is_empty() {
            return Err("Entry point cannot be empty".to_string());
        }

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("Artifact name cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_project_layout() {
        let args = Args::parse_from(["onedist"]);
        assert_eq!(args.project_root, PathBuf::from("."));
        assert_eq!(args.entry_point, PathBuf::from("app.py"));
        assert_eq!(args.build_dir, PathBuf::from("build"));
        assert_eq!(args.dist_dir, PathBuf::from("dist"));
        assert_eq!(args.packager, "pyinstaller");
        assert!(!args.non_interactive);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn blank_artifact_name_fails_validation() {
        let args = Args::parse_from(["onedist", "--name", "  "]);
        assert!(args.validate().is_err());
    }
}

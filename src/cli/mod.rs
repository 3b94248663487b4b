//! Command line interface for the build pipeline.
//!
//! Parses arguments, resolves them into pipeline settings, runs the build,
//! and turns the outcome into the process exit code callers consume.

mod args;

pub use args::Args;

use crate::notify::{FailureNotifier, PromptNotifier, SilentNotifier};
use crate::pipeline::BuildPipeline;
use crate::settings::{PipelineSettings, SettingsBuilder};
use std::io::IsTerminal;

/// Exit code for argument and configuration errors, before the pipeline starts.
const USAGE_ERROR: i32 = 2;

/// Main CLI entry point
pub async fn run() -> i32 {
    let args = Args::parse_args();

    if let Err(reason) = args.validate() {
        eprintln!("Error: {reason}");
        return USAGE_ERROR;
    }

    let settings = match settings_from_args(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return USAGE_ERROR;
        }
    };

    let notifier: Box<dyn FailureNotifier> =
        if args.non_interactive || !std::io::stdin().is_terminal() {
            Box::new(SilentNotifier)
        } else {
            Box::new(PromptNotifier)
        };

    execute(settings, notifier.as_ref()).await
}

/// Resolve parsed arguments into pipeline settings.
fn settings_from_args(args: &Args) -> anyhow::Result<PipelineSettings> {
    let mut builder = SettingsBuilder::new()
        .project_root(&args.project_root)
        .entry_point(&args.entry_point)
        .build_dir(&args.build_dir)
        .dist_dir(&args.dist_dir)
        .packager(&args.packager);

    if let Some(name) = &args.name {
        builder = builder.artifact_name(name);
    }

    builder.build()
}

/// Runs the pipeline and maps the outcome to an exit code.
///
/// On failure the error is reported, the notifier gets one chance to hold
/// the terminal open, and the failing step's status code becomes the exit
/// code. Nothing runs after the first failure.
pub async fn execute(settings: PipelineSettings, notifier: &dyn FailureNotifier) -> i32 {
    let pipeline = BuildPipeline::new(settings);

    match pipeline.run().await {
        Ok(()) => {
            println!(
                "✓ Build complete: {}",
                pipeline.settings().dist_dir().display()
            );
            0
        }
        Err(e) => {
            eprintln!("Error: build failed during {}: {}", e.step(), e);
            notifier.acknowledge(&e);
            e.exit_code()
        }
    }
}

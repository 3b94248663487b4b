//! onedist - single-file executable build pipeline.
//!
//! This binary cleans the build and distribution directories, recreates the
//! distribution directory, and invokes the packaging tool, exiting with the
//! failing step's status code or 0 on success.

mod cli;
mod error;
mod notify;
mod pipeline;
mod settings;

use std::process;

#[tokio::main]
async fn main() {
    // Step announcements go through log at info level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = cli::run().await;

    process::exit(exit_code);
}

//! Failure acknowledgment for interactive runs.
//!
//! When a build fails at an operator's terminal the pipeline holds the window
//! open until the failure is acknowledged, so the error text is not lost when
//! the shell closes. Automated callers inject [`SilentNotifier`] instead.

use crate::error::BuildError;
use std::io::{BufRead, Write};

/// Collaborator invoked once when a run fails, before the process exits.
pub trait FailureNotifier {
    /// Called with the failure; may block for operator acknowledgment.
    fn acknowledge(&self, error: &BuildError);
}

/// Blocks on stdin until the operator presses Enter.
pub struct PromptNotifier;

impl FailureNotifier for PromptNotifier {
    fn acknowledge(&self, _error: &BuildError) {
        eprint!("Press Enter to exit...");
        let _ = std::io::stderr().flush();

        let mut line = String::new();
        let _ = std::io::stdin().lock().read_line(&mut line);
    }
}

/// No-op notifier for non-interactive and automated runs.
pub struct SilentNotifier;

impl FailureNotifier for SilentNotifier {
    fn acknowledge(&self, _error: &BuildError) {}
}

//! Helpers shared across CLI commands

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::ccache::{CacheTool, InvocationResult, Operation};
use crate::config::Config;
use crate::error::{CcstatError, Result};

/// Run one ccache operation and wait for it, honoring the configured timeout.
///
/// Fails fast with `NotInstalled` before spawning anything when the tool was
/// never located, and turns a non-zero exit into a `CommandFailed` carrying
/// whatever ccache wrote to stderr.
pub fn run_and_wait(
    tool: &CacheTool,
    config: &Config,
    operation: Operation,
) -> Result<InvocationResult> {
    if !tool.installed() {
        return Err(CcstatError::NotInstalled);
    }

    let invocation = tool.run(operation);
    let result = match config.timeout() {
        Some(timeout) => invocation.wait_timeout(timeout)?,
        None => invocation.wait()?,
    };

    if !result.success {
        return Err(CcstatError::command_failed(operation.name(), &result.stderr));
    }

    Ok(result)
}

/// Set up a Ctrl+C interrupt handler for graceful cancellation.
///
/// Returns an `Arc<AtomicBool>` that flips to `true` when the user presses
/// Ctrl+C. If a handler is already registered the new registration silently
/// fails but the returned atomic still works for the current operation.
pub fn setup_interrupt_handler() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    })
    .ok();

    interrupted
}

/// Check if the interrupt flag has been set
#[inline]
pub fn is_interrupted(interrupted: &AtomicBool) -> bool {
    interrupted.load(Ordering::SeqCst)
}

/// Ask the user a yes/no question on stdin; only an explicit "y"/"yes"
/// counts as consent.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

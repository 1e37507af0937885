use std::process::Command;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::{CcstatError, Result};

use super::tool::CacheTool;

/// The four ccache operations this tool drives.
///
/// Each maps onto exactly one flag; there is deliberately no generalized
/// argument builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `-c`: clean up old files, trim the cache to its size limit
    Cleanup,
    /// `-C`: clear the entire cache
    ClearCache,
    /// `-z`: zero the statistics counters
    ZeroStats,
    /// `-s`: print the statistics report
    ShowStats,
}

impl Operation {
    /// The single flag passed to ccache for this operation
    pub fn flag(self) -> &'static str {
        match self {
            Self::Cleanup => "-c",
            Self::ClearCache => "-C",
            Self::ZeroStats => "-z",
            Self::ShowStats => "-s",
        }
    }

    /// Human-readable operation name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Cleanup => "cleanup",
            Self::ClearCache => "clear",
            Self::ZeroStats => "zero",
            Self::ShowStats => "stats",
        }
    }
}

/// Outcome of one ccache run.
///
/// Ephemeral: produced once per invocation and consumed by the caller.
/// stderr is always captured so callers can decide whether to surface it.
#[derive(Debug)]
pub struct InvocationResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl InvocationResult {
    fn failed(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: detail.into(),
        }
    }
}

/// Handle to an in-flight ccache invocation.
///
/// The subprocess runs on its own background thread; the result comes back
/// over a channel so the caller chooses between blocking indefinitely and
/// enforcing a timeout.
pub struct Invocation {
    operation: Operation,
    rx: mpsc::Receiver<InvocationResult>,
}

impl Invocation {
    /// Block until the subprocess exits
    pub fn wait(self) -> Result<InvocationResult> {
        self.rx
            .recv()
            .map_err(|_| CcstatError::command_failed(self.operation.name(), "worker thread died"))
    }

    /// Block until the subprocess exits or the timeout elapses.
    ///
    /// On timeout the subprocess keeps running to completion on its
    /// detached thread; only the wait is abandoned.
    pub fn wait_timeout(self, timeout: Duration) -> Result<InvocationResult> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => Ok(result),
            Err(mpsc::RecvTimeoutError::Timeout) => Err(CcstatError::Timeout {
                operation: self.operation.name(),
                seconds: timeout.as_secs(),
            }),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(CcstatError::command_failed(
                self.operation.name(),
                "worker thread died",
            )),
        }
    }
}

impl CacheTool {
    /// Launch ccache with the operation's flag on a background thread.
    ///
    /// A not-installed tool completes immediately with a failure result and
    /// spawns nothing. There is no guard against concurrent invocations;
    /// ccache handles its own on-disk locking.
    pub fn run(&self, operation: Operation) -> Invocation {
        let (tx, rx) = mpsc::channel();

        match self.path() {
            None => {
                let _ = tx.send(InvocationResult::failed(String::new()));
            }
            Some(path) => {
                let path = path.to_path_buf();
                thread::spawn(move || {
                    let result = match Command::new(&path).arg(operation.flag()).output() {
                        Ok(output) => InvocationResult {
                            success: output.status.success(),
                            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                        },
                        Err(e) => InvocationResult::failed(e.to_string()),
                    };
                    let _ = tx.send(result);
                });
            }
        }

        Invocation { operation, rx }
    }
}

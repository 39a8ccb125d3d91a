//! Remediation action execution.
//!
//! # Responsibilities
//! - Run the configured executable with no arguments
//! - Capture exit code, wall-clock duration, stdout and stderr
//! - Fold every failure mode into the outcome (the daemon never dies here)
//!
//! # Design Decisions
//! - Exit-code synthesis mirrors shell conventions: 127 when the executable
//!   is missing, 1 for any other execution failure (including death by
//!   signal, which yields no exit code of its own)
//! - No enforced timeout: a hung action blocks the monitoring loop. Known
//!   risk, accepted so remediation attempts can never overlap.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;

/// What happened when the remediation action ran. Logged, then discarded.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    /// Real exit code on normal completion, synthesized otherwise.
    pub exit_code: i32,

    /// Wall-clock time from spawn to completion (or failure).
    pub duration: Duration,

    /// Captured standard output, surrounding whitespace trimmed.
    pub stdout: String,

    /// Captured standard error, surrounding whitespace trimmed.
    pub stderr: String,

    /// Reason the action could not run normally, when it could not.
    pub failure: Option<String>,
}

impl ActionOutcome {
    fn completed(exit_code: i32, duration: Duration, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            duration,
            stdout,
            stderr,
            failure: None,
        }
    }

    fn failed(exit_code: i32, duration: Duration, reason: String) -> Self {
        Self {
            exit_code,
            duration,
            stdout: String::new(),
            stderr: String::new(),
            failure: Some(reason),
        }
    }

    /// True when the action could not be executed at all.
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Capability seam for running the remediation action.
///
/// The scheduler decides *when* to remediate; implementations decide *how*.
/// Tests substitute a recording fake and assert firing decisions without
/// spawning processes.
#[async_trait]
pub trait ActionInvoker: Send + Sync {
    /// Run the action to completion and report what happened.
    async fn invoke(&self) -> ActionOutcome;
}

/// Invoker that executes an external program with no arguments.
pub struct ProcessInvoker {
    path: PathBuf,
}

impl ProcessInvoker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the configured executable.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ActionInvoker for ProcessInvoker {
    async fn invoke(&self) -> ActionOutcome {
        let start = Instant::now();

        match Command::new(&self.path).output().await {
            Ok(output) => {
                let duration = start.elapsed();
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

                match output.status.code() {
                    Some(code) => ActionOutcome::completed(code, duration, stdout, stderr),
                    // Killed by a signal: no exit code exists to report.
                    None => {
                        let reason = signal_reason(&output.status);
                        ActionOutcome::failed(1, duration, reason)
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ActionOutcome::failed(
                127,
                start.elapsed(),
                format!("action executable not found: {}", self.path.display()),
            ),
            Err(e) => ActionOutcome::failed(1, start.elapsed(), e.to_string()),
        }
    }
}

#[cfg(unix)]
fn signal_reason(status: &std::process::ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(sig) => format!("action terminated by signal {}", sig),
        None => "action terminated abnormally".to_string(),
    }
}

#[cfg(not(unix))]
fn signal_reason(_status: &std::process::ExitStatus) -> String {
    "action terminated abnormally".to_string()
}

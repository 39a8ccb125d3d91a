//! Shared fakes for integration tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use connwatch::action::{ActionInvoker, ActionOutcome};
use connwatch::probe::{ProbeError, ProbeOutcome, Prober};

/// Prober whose reachability the test flips through a shared flag.
pub struct SwitchProber {
    reachable: Arc<AtomicBool>,
    probes: Arc<AtomicUsize>,
}

impl SwitchProber {
    pub fn new(reachable: Arc<AtomicBool>) -> Self {
        Self {
            reachable,
            probes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle to the total probe count.
    pub fn probe_count(&self) -> Arc<AtomicUsize> {
        self.probes.clone()
    }
}

#[async_trait]
impl Prober for SwitchProber {
    async fn probe(&self, target: &str, _timeout: Duration) -> ProbeOutcome {
        self.probes.fetch_add(1, Ordering::SeqCst);
        if self.reachable.load(Ordering::SeqCst) {
            ProbeOutcome::success(target, 1)
        } else {
            ProbeOutcome::failure(target, ProbeError::Unreachable)
        }
    }
}

/// Invoker that records invocations instead of spawning a process.
pub struct RecordingInvoker {
    invocations: Arc<AtomicUsize>,
}

impl RecordingInvoker {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle to the invocation count.
    pub fn invocation_count(&self) -> Arc<AtomicUsize> {
        self.invocations.clone()
    }
}

#[async_trait]
impl ActionInvoker for RecordingInvoker {
    async fn invoke(&self) -> ActionOutcome {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        ActionOutcome {
            exit_code: 0,
            duration: Duration::from_millis(1),
            stdout: String::new(),
            stderr: String::new(),
            failure: None,
        }
    }
}

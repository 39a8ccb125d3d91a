//! Reachability probing via the system ping binary.
//!
//! # Responsibilities
//! - Send one reachability probe to one target with a bounded timeout
//! - Classify the result (success with latency, timeout, unreachable, other)
//!
//! # Design Decisions
//! - No in-process ICMP stack; probes shell out to `ping` (raw sockets need
//!   elevated privileges the daemon should not hold)
//! - A probe never returns an error: failures are data for the aggregate
//! - The outer timeout gets one second of grace over ping's own `-W` so the
//!   binary's timeout fires first under normal conditions

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time;

use super::types::{ProbeError, ProbeOutcome};

/// A reachability probe against a single target.
///
/// Trait seam so the monitoring loop can be driven by a scripted fake in
/// tests without touching the network.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe one target once, bounded by `timeout`.
    async fn probe(&self, target: &str, timeout: Duration) -> ProbeOutcome;
}

/// Prober that spawns `ping -c 1 -W <secs> <target>`.
pub struct PingProber;

impl PingProber {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PingProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, target: &str, timeout: Duration) -> ProbeOutcome {
        let start = Instant::now();

        let ping = Command::new("ping")
            .arg("-c")
            .arg("1")
            .arg("-W")
            .arg(timeout.as_secs().to_string())
            .arg(target)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match time::timeout(timeout + Duration::from_secs(1), ping).await {
            Ok(Ok(output)) => {
                if output.status.success() {
                    let latency_ms = start.elapsed().as_millis() as u64;
                    ProbeOutcome::success(target, latency_ms)
                } else {
                    ProbeOutcome::failure(target, ProbeError::Unreachable)
                }
            }
            Ok(Err(e)) => ProbeOutcome::failure(target, ProbeError::Other(e.to_string())),
            Err(_) => ProbeOutcome::failure(target, ProbeError::Timeout),
        }
    }
}

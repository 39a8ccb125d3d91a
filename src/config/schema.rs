//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the daemon.
//! All types derive Serde traits for deserialization from config files; the
//! environment overrides applied on top live in the loader.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the connectivity watchdog.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WatchdogConfig {
    /// Targets to probe, in order. Must be non-empty.
    pub targets: Vec<String>,

    /// Seconds between cycle starts.
    pub check_interval_secs: u64,

    /// Consecutive failed cycles required before the action fires.
    pub failure_threshold: u32,

    /// Minimum seconds between two action invocations.
    pub cooldown_secs: u64,

    /// Per-probe timeout in seconds.
    pub probe_timeout_secs: u64,

    /// File the health verdict is written to every cycle.
    pub health_file: PathBuf,

    /// Remediation executable, invoked with no arguments.
    pub action_path: PathBuf,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            check_interval_secs: 30,
            failure_threshold: 3,
            cooldown_secs: 300,
            probe_timeout_secs: 5,
            health_file: PathBuf::from("/tmp/health_status"),
            action_path: PathBuf::from("/action.sh"),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl WatchdogConfig {
    /// Interval between cycle starts.
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    /// Minimum time between action invocations.
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// Timeout passed to each probe.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log output format: "json" or "pretty".
    pub log_format: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: "json".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

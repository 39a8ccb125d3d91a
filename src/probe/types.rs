//! Probe outcome types.

use serde::Serialize;
use thiserror::Error;

/// Classification of a failed probe.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeError {
    /// The probe did not complete within the allotted timeout.
    #[error("timeout")]
    Timeout,

    /// The probe completed but the target did not respond.
    #[error("unreachable")]
    Unreachable,

    /// The probe could not be executed (spawn failure, etc.).
    #[error("{0}")]
    Other(String),
}

/// Result of probing a single target once.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutcome {
    /// Target that was probed.
    pub target: String,

    /// Whether the target responded.
    pub success: bool,

    /// Round-trip latency in milliseconds (successful probes only).
    pub latency_ms: Option<u64>,

    /// Failure classification (failed probes only).
    pub error: Option<ProbeError>,
}

impl ProbeOutcome {
    /// A successful probe with measured latency.
    pub fn success(target: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            target: target.into(),
            success: true,
            latency_ms: Some(latency_ms),
            error: None,
        }
    }

    /// A failed probe with its classification.
    pub fn failure(target: impl Into<String>, error: ProbeError) -> Self {
        Self {
            target: target.into(),
            success: false,
            latency_ms: None,
            error: Some(error),
        }
    }
}

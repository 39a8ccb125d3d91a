//! Reachability probing subsystem.
//!
//! # Data Flow
//! ```text
//! monitor::CycleEvaluator
//!     → Prober::probe(target, timeout)   (one probe per target per cycle)
//!     → ProbeOutcome (success + latency, or classified failure)
//! ```
//!
//! # Design Decisions
//! - Probes are independent: one target's failure never cancels another's
//! - No per-probe retry; the cycle cadence is the retry policy

pub mod pinger;
pub mod types;

pub use pinger::{PingProber, Prober};
pub use types::{ProbeError, ProbeOutcome};

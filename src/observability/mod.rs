//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! monitoring loop produces:
//!     → logging.rs (structured JSON log events)
//!     → metrics.rs (counters, gauges; optional Prometheus exposition)
//!
//! Consumers:
//!     → log aggregation (stdout)
//!     → metrics scrape endpoint (when enabled)
//! ```

pub mod logging;
pub mod metrics;

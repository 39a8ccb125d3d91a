//! Metrics collection and exposition.
//!
//! # Metrics
//! - `connwatch_cycles_total` (counter): cycles by result (up/down)
//! - `connwatch_connectivity_up` (gauge): 1=healthy, 0=unhealthy
//! - `connwatch_consecutive_failures` (gauge): current failure run length
//! - `connwatch_actions_total` (counter): action invocations by outcome
//!
//! # Design Decisions
//! - Updates are unconditional and cheap; exposition is opt-in
//! - Exporter failures are logged, never fatal (observability must not take
//!   the daemon down)

use std::net::SocketAddr;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr` and describe the metric set.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics endpoint listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Prometheus exporter");
            return;
        }
    }

    describe_counter!("connwatch_cycles_total", "Probing cycles by result");
    describe_gauge!("connwatch_connectivity_up", "1 when the latest cycle reached any target");
    describe_gauge!("connwatch_consecutive_failures", "Current consecutive failed cycles");
    describe_counter!("connwatch_actions_total", "Remediation action invocations by outcome");
}

/// Record the outcome of one probing cycle.
pub fn record_cycle(any_reachable: bool, consecutive_failures: u32) {
    let result = if any_reachable { "up" } else { "down" };
    counter!("connwatch_cycles_total", "result" => result).increment(1);
    gauge!("connwatch_connectivity_up").set(if any_reachable { 1.0 } else { 0.0 });
    gauge!("connwatch_consecutive_failures").set(consecutive_failures as f64);
}

/// Record one remediation action invocation.
pub fn record_action(failed: bool) {
    let outcome = if failed { "failed" } else { "complete" };
    counter!("connwatch_actions_total", "outcome" => outcome).increment(1);
}

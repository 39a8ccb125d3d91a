//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT)
//! - Translate signals into the shutdown broadcast
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The loop finishes its current cycle before exiting; there is no
//!   mid-cycle cancellation

use super::shutdown::Shutdown;

/// Wait for SIGTERM or SIGINT, then trigger shutdown.
///
/// Runs as a background task for the life of the process.
#[cfg(unix)]
pub async fn listen(shutdown: Shutdown) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to register SIGTERM handler");
            return;
        }
    };
    let mut sigint = match signal(SignalKind::interrupt()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to register SIGINT handler");
            return;
        }
    };

    let received = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };

    tracing::info!(event = "shutdown", signal = received, "Shutdown signal received");
    shutdown.trigger();
}

#[cfg(not(unix))]
pub async fn listen(shutdown: Shutdown) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!(event = "shutdown", signal = "ctrl_c", "Shutdown signal received");
        shutdown.trigger();
    }
}

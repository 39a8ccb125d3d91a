//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Select output format (JSON lines for production, pretty for development)
//!
//! # Design Decisions
//! - Semantic events carry an `event` field (`startup`, `check_result`,
//!   `action_triggered`, ...) so downstream tooling can filter without
//!   parsing message text
//! - JSON output flattens event fields into the root object, one object per
//!   line
//! - Level filtering via `RUST_LOG`, defaulting to info

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `format` is `"pretty"` for human-readable output; anything else selects
/// JSON lines. Calling this twice panics, so the binary initializes exactly
/// once.
pub fn init(format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "connwatch=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if format == "pretty" {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    }
}

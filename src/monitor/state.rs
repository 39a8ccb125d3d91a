//! Failure state machine.
//!
//! # States
//! - Healthy: the latest cycle reached at least one target
//! - Unhealthy: the latest cycle reached no target
//!
//! # State Transitions
//! ```text
//! Healthy → Unhealthy: any cycle with no reachable target
//! Unhealthy → Healthy: any cycle with a reachable target (counter resets)
//! ```
//!
//! The remediation action fires on the exact cycle the consecutive-failure
//! counter climbs to the threshold, gated by the cooldown. The crossing is
//! edge-triggered: failures continuing past the threshold never re-fire on
//! their own. A success must reset the counter before the threshold can be
//! crossed again, so the action runs at most once per outage episode and at
//! most once per cooldown window.
//!
//! # Design Decisions
//! - `evaluate` is pure decision logic: no I/O, no process execution; the
//!   scheduler performs the side effects the verdict asks for
//! - Single owner, plain fields: the scheduler is the only caller, so no
//!   atomics or locks
//! - `last_action_at` is stamped before the action runs, so a cycle that
//!   overlaps a slow action cannot double-trigger

use std::time::{Duration, Instant};

use super::cycle::CycleResult;

/// Decision for one cycle, returned by [`FailureState::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Health of the latest cycle.
    pub healthy: bool,

    /// Whether the health artifact should be (re)written. Always true today;
    /// publishing is unconditional so the artifact can never go stale.
    pub publish: bool,

    /// Whether the remediation action should run now.
    pub invoke_action: bool,
}

/// Consecutive-failure tracking and action gating.
///
/// Owns the only mutable state in the daemon: the failure counter, the time
/// of the last action invocation, and the last published health verdict.
#[derive(Debug)]
pub struct FailureState {
    failure_threshold: u32,
    cooldown: Duration,
    consecutive_failures: u32,
    last_action_at: Option<Instant>,
    healthy: bool,
}

impl FailureState {
    /// Create a fresh state machine.
    ///
    /// `failure_threshold` must be at least 1 (enforced by config
    /// validation); a zero `cooldown` allows refiring every time the counter
    /// re-crosses the threshold after a reset.
    pub fn new(failure_threshold: u32, cooldown: Duration) -> Self {
        Self {
            failure_threshold,
            cooldown,
            consecutive_failures: 0,
            last_action_at: None,
            healthy: true,
        }
    }

    /// Fold one cycle into the state and decide what the scheduler should do.
    pub fn evaluate(&mut self, cycle: &CycleResult, now: Instant) -> Verdict {
        if cycle.any_reachable {
            self.healthy = true;
            self.consecutive_failures = 0;
            return Verdict {
                healthy: true,
                publish: true,
                invoke_action: false,
            };
        }

        self.healthy = false;
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);

        let at_threshold = self.consecutive_failures == self.failure_threshold;
        let cooled_down = match self.last_action_at {
            None => true,
            Some(at) => now.duration_since(at) >= self.cooldown,
        };

        let invoke_action = at_threshold && cooled_down;
        if invoke_action {
            self.last_action_at = Some(now);
        }

        Verdict {
            healthy: false,
            publish: true,
            invoke_action,
        }
    }

    /// Current consecutive-failure count.
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Health verdict of the most recent cycle.
    pub fn is_healthy(&self) -> bool {
        self.healthy
    }
}

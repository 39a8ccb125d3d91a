//! Monitoring loop.
//!
//! # Responsibilities
//! - Drive cycles at the configured interval, forever
//! - Hand each cycle result to the failure state machine
//! - Perform the side effects the verdict asks for: publish health, invoke
//!   the remediation action
//!
//! # Design Decisions
//! - The first cycle runs immediately; the interval waits come after
//! - Action invocation is synchronous: the next cycle cannot start until
//!   remediation finishes, so remediation attempts never overlap
//! - `MissedTickBehavior::Delay` because a slow action can overrun the
//!   interval; catching up with a burst of cycles would be wrong

use std::time::Instant;

use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::action::ActionInvoker;
use crate::config::WatchdogConfig;
use crate::observability::metrics;
use crate::probe::Prober;
use crate::status::StatusPublisher;

use super::cycle::CycleEvaluator;
use super::state::FailureState;

/// The composed daemon: evaluator, state machine, and the side-effect
/// capabilities behind their trait seams.
pub struct Watchdog {
    evaluator: CycleEvaluator,
    state: FailureState,
    invoker: Box<dyn ActionInvoker>,
    publisher: Box<dyn StatusPublisher>,
    check_interval: std::time::Duration,
}

impl Watchdog {
    pub fn new(
        config: &WatchdogConfig,
        prober: Box<dyn Prober>,
        invoker: Box<dyn ActionInvoker>,
        publisher: Box<dyn StatusPublisher>,
    ) -> Self {
        Self {
            evaluator: CycleEvaluator::new(prober, config.targets.clone(), config.probe_timeout()),
            state: FailureState::new(config.failure_threshold, config.cooldown()),
            invoker,
            publisher,
            check_interval: config.check_interval(),
        }
    }

    /// Run cycles until the shutdown signal arrives.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = time::interval(self.check_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.run_cycle().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Monitoring loop received shutdown signal, exiting");
                    break;
                }
            }
        }
    }

    /// One full pass: probe, evaluate, publish, remediate if told to.
    ///
    /// Public so tests can step the daemon deterministically without timers.
    pub async fn run_cycle(&mut self) {
        let cycle = self.evaluator.run().await;
        let verdict = self.state.evaluate(&cycle, Instant::now());

        metrics::record_cycle(verdict.healthy, self.state.consecutive_failures());

        if verdict.publish {
            if let Err(e) = self.publisher.publish(verdict.healthy).await {
                tracing::warn!(
                    event = "health_write_failed",
                    error = %e,
                    "Failed to write health status"
                );
            }
        }

        if verdict.invoke_action {
            self.invoke_action().await;
        }
    }

    async fn invoke_action(&self) {
        tracing::error!(
            event = "action_triggered",
            consecutive_failures = self.state.consecutive_failures(),
            "Failure threshold reached, invoking remediation action"
        );

        let outcome = self.invoker.invoke().await;
        metrics::record_action(outcome.is_failure());

        match &outcome.failure {
            Some(reason) => {
                tracing::error!(
                    event = "action_failed",
                    error = %reason,
                    exit_code = outcome.exit_code,
                    duration_ms = outcome.duration.as_millis() as u64,
                    "Remediation action could not run"
                );
            }
            None => {
                tracing::info!(
                    event = "action_complete",
                    exit_code = outcome.exit_code,
                    duration_ms = outcome.duration.as_millis() as u64,
                    "Remediation action completed"
                );
            }
        }

        if !outcome.stdout.is_empty() {
            tracing::info!(event = "action_stdout", output = %outcome.stdout, "Action output");
        }
        if !outcome.stderr.is_empty() {
            tracing::warn!(event = "action_stderr", output = %outcome.stderr, "Action error output");
        }
    }
}

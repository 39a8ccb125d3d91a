//! Per-cycle connectivity evaluation.
//!
//! # Responsibilities
//! - Probe every configured target exactly once per cycle
//! - Fold per-target outcomes into the any-reachable aggregate
//! - Emit `check_started` / `check_result` events
//!
//! # Design Decisions
//! - All targets are always probed, even after an early success: the cycle
//!   measures availability, it does not race to a first answer
//! - Probes run concurrently but join back in configured target order, so
//!   the state machine sees a deterministic result
//! - No per-probe retry; the check interval is the retry cadence

use std::time::Duration;

use futures_util::future::join_all;

use crate::probe::{ProbeOutcome, Prober};

/// Aggregate result of one probing cycle. Constructed here, consumed by the
/// failure state machine, then discarded.
#[derive(Debug, Clone)]
pub struct CycleResult {
    /// True iff at least one target responded this cycle.
    pub any_reachable: bool,

    /// Per-target outcomes, in configured target order.
    pub outcomes: Vec<ProbeOutcome>,
}

/// Runs the prober against the full target set once per invocation.
pub struct CycleEvaluator {
    prober: Box<dyn Prober>,
    targets: Vec<String>,
    probe_timeout: Duration,
}

impl CycleEvaluator {
    pub fn new(prober: Box<dyn Prober>, targets: Vec<String>, probe_timeout: Duration) -> Self {
        Self {
            prober,
            targets,
            probe_timeout,
        }
    }

    /// Probe all targets and aggregate the outcomes.
    pub async fn run(&self) -> CycleResult {
        tracing::info!(
            event = "check_started",
            targets = ?self.targets,
            "Probing all targets"
        );

        let probes = self
            .targets
            .iter()
            .map(|target| self.prober.probe(target, self.probe_timeout));

        // join_all preserves input order regardless of completion order.
        let outcomes = join_all(probes).await;

        for outcome in &outcomes {
            if outcome.success {
                tracing::info!(
                    event = "check_result",
                    target = %outcome.target,
                    success = true,
                    latency_ms = outcome.latency_ms.unwrap_or_default(),
                    "Target reachable"
                );
            } else {
                let error = outcome
                    .error
                    .as_ref()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                tracing::info!(
                    event = "check_result",
                    target = %outcome.target,
                    success = false,
                    error = %error,
                    "Target unreachable"
                );
            }
        }

        let any_reachable = outcomes.iter().any(|o| o.success);
        CycleResult {
            any_reachable,
            outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Prober that succeeds only for listed targets, counting every probe.
    struct SelectiveProber {
        reachable: Vec<String>,
        probes: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Prober for SelectiveProber {
        async fn probe(&self, target: &str, _timeout: Duration) -> ProbeOutcome {
            self.probes.fetch_add(1, Ordering::SeqCst);
            if self.reachable.iter().any(|t| t == target) {
                ProbeOutcome::success(target, 5)
            } else {
                ProbeOutcome::failure(target, ProbeError::Unreachable)
            }
        }
    }

    #[tokio::test]
    async fn test_every_target_probed_even_after_success() {
        let probes = Arc::new(AtomicUsize::new(0));
        let evaluator = CycleEvaluator::new(
            Box::new(SelectiveProber {
                reachable: vec!["1.1.1.1".into()],
                probes: probes.clone(),
            }),
            vec!["1.1.1.1".into(), "8.8.8.8".into(), "9.9.9.9".into()],
            Duration::from_secs(1),
        );

        let result = evaluator.run().await;

        assert!(result.any_reachable);
        assert_eq!(result.outcomes.len(), 3);
        // First target succeeded, the remaining two were still probed.
        assert_eq!(probes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_outcomes_keep_configured_order() {
        let evaluator = CycleEvaluator::new(
            Box::new(SelectiveProber {
                reachable: vec!["b".into()],
                probes: Arc::new(AtomicUsize::new(0)),
            }),
            vec!["a".into(), "b".into(), "c".into()],
            Duration::from_secs(1),
        );

        let result = evaluator.run().await;

        let order: Vec<&str> = result.outcomes.iter().map(|o| o.target.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_all_unreachable_aggregates_false() {
        let evaluator = CycleEvaluator::new(
            Box::new(SelectiveProber {
                reachable: Vec::new(),
                probes: Arc::new(AtomicUsize::new(0)),
            }),
            vec!["a".into(), "b".into()],
            Duration::from_secs(1),
        );

        let result = evaluator.run().await;

        assert!(!result.any_reachable);
        assert!(result.outcomes.iter().all(|o| !o.success));
    }
}

//! Connectivity monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! scheduler.rs (interval tick)
//!     → cycle.rs (probe all targets, aggregate any_reachable)
//!     → state.rs (consecutive failures, cooldown gating → Verdict)
//!     → scheduler.rs side effects:
//!         publish health file (every cycle)
//!         invoke remediation action (when the verdict says so)
//! ```
//!
//! # Design Decisions
//! - state.rs decides, scheduler.rs acts: the state machine stays pure and
//!   unit-testable without timers or processes
//! - One cycle runs to completion before the next starts; the state machine
//!   is never shared across tasks

pub mod cycle;
pub mod scheduler;
pub mod state;

pub use cycle::{CycleEvaluator, CycleResult};
pub use scheduler::Watchdog;
pub use state::{FailureState, Verdict};

//! Remediation action subsystem.

pub mod invoker;

pub use invoker::{ActionInvoker, ActionOutcome, ProcessInvoker};

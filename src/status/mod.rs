//! Health status subsystem.

pub mod publisher;

pub use publisher::{FileStatusPublisher, StatusPublisher, HEALTHY, UNHEALTHY};

//! Health status publication.
//!
//! # Responsibilities
//! - Persist the latest health verdict where an external process can read it
//!
//! # Design Decisions
//! - The artifact is overwritten whole every cycle, never appended; with a
//!   single writer, last-writer-wins needs no locking
//! - Published unconditionally each cycle so the artifact can never go stale

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Text written for a healthy verdict.
pub const HEALTHY: &str = "healthy";

/// Text written for an unhealthy verdict.
pub const UNHEALTHY: &str = "unhealthy";

/// Capability seam for persisting the health verdict.
#[async_trait]
pub trait StatusPublisher: Send + Sync {
    /// Persist the verdict of the latest cycle.
    async fn publish(&self, healthy: bool) -> io::Result<()>;
}

/// Publisher that overwrites a file with the literal text `healthy` or
/// `unhealthy`, readable by an external liveness check.
pub struct FileStatusPublisher {
    path: PathBuf,
}

impl FileStatusPublisher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the health artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StatusPublisher for FileStatusPublisher {
    async fn publish(&self, healthy: bool) -> io::Result<()> {
        let status = if healthy { HEALTHY } else { UNHEALTHY };
        tokio::fs::write(&self.path, status).await
    }
}

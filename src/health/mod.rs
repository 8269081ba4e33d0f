//! Process health reporting.
//!
//! Container probes poll `GET /health`; the payload says the process is up,
//! when the answer was produced, and for how long the process has run.

mod server;

pub use server::*;

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    /// Always `"healthy"` while the server can answer
    pub status: String,
    /// When the response was produced (RFC 3339, UTC)
    pub timestamp: DateTime<Utc>,
    /// Seconds since the process started
    pub uptime: f64,
}

impl HealthStatus {
    /// A healthy status for a process started at `started_at`.
    pub fn healthy(started_at: Instant) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            uptime: started_at.elapsed().as_secs_f64(),
        }
    }
}

//! Call-scoped processing trace
//!
//! Every `resolve` call accumulates its own [`ProcessingStats`], so
//! concurrent calls never interleave trace entries. The trace is diagnostic
//! output only; resolution behavior never depends on it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

/// One named step in a resolution call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStats {
    /// Step name, e.g. `block:hero`
    pub name: String,

    /// Wall-clock start
    pub started_at: DateTime<Utc>,

    /// Wall-clock end
    pub finished_at: DateTime<Utc>,

    /// Monotonic duration in milliseconds
    pub duration_ms: f64,

    /// Whether the step completed
    pub success: bool,

    /// Error text for failed steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Free-form note, e.g. which variant-selection branch fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// In-flight timer for one step
#[derive(Debug)]
pub struct StepTimer {
    name: String,
    started_at: DateTime<Utc>,
    instant: Instant,
    detail: Option<String>,
}

impl StepTimer {
    /// Start timing a named step
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            started_at: Utc::now(),
            instant: Instant::now(),
            detail: None,
        }
    }

    /// Attach a note to the step
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn finish(self, success: bool, error: Option<String>) -> StepStats {
        StepStats {
            name: self.name,
            started_at: self.started_at,
            finished_at: Utc::now(),
            duration_ms: self.instant.elapsed().as_secs_f64() * 1000.0,
            success,
            error,
            detail: self.detail,
        }
    }
}

/// The full trace for one resolution call
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStats {
    steps: Vec<StepStats>,
}

impl ProcessingStats {
    /// Create an empty trace
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed step
    pub fn complete(&mut self, timer: StepTimer) {
        self.steps.push(timer.finish(true, None));
    }

    /// Record a failed step
    pub fn fail(&mut self, timer: StepTimer, error: impl std::fmt::Display) {
        self.steps.push(timer.finish(false, Some(error.to_string())));
    }

    /// The recorded steps, in execution order
    pub fn steps(&self) -> &[StepStats] {
        &self.steps
    }

    /// Total recorded duration in milliseconds
    pub fn total_duration_ms(&self) -> f64 {
        self.steps.iter().map(|s| s.duration_ms).sum()
    }

    /// Whether every recorded step succeeded
    pub fn succeeded(&self) -> bool {
        self.steps.iter().all(|s| s.success)
    }
}

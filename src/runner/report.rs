//! Run report records.
//!
//! A [`RunRecord`] is the serializable projection of a [`JobExecution`],
//! used for machine-readable output. Records are created fresh per run and
//! never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::steps::{StepResult, StepStatus};

use super::{JobExecution, JobStatus};

/// A record of a single job run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// When the run started.
    pub timestamp: DateTime<Utc>,

    /// Which job was executed.
    pub job: String,

    /// Total duration in milliseconds.
    pub duration_ms: u64,

    /// Terminal status.
    pub status: JobStatus,

    /// Steps that were attempted, in execution order.
    pub steps: Vec<StepRecord>,

    /// Error message of the failing step, if the run failed.
    pub error: Option<String>,
}

/// Per-step entry in a [`RunRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step name.
    pub name: String,

    /// Terminal status.
    pub status: StepStatus,

    /// Execution duration in milliseconds.
    pub duration_ms: u64,

    /// Error message (if failed).
    pub error: Option<String>,
}

impl From<&StepResult> for StepRecord {
    fn from(result: &StepResult) -> Self {
        Self {
            name: result.name.clone(),
            status: result.status,
            duration_ms: result.duration.as_millis() as u64,
            error: result.error.clone(),
        }
    }
}

impl From<&JobExecution> for RunRecord {
    fn from(execution: &JobExecution) -> Self {
        Self {
            timestamp: execution.started_at,
            job: execution.job.clone(),
            duration_ms: execution.duration.as_millis() as u64,
            status: execution.status,
            steps: execution.steps.iter().map(StepRecord::from).collect(),
            error: execution.failure_reason().map(str::to_string),
        }
    }
}

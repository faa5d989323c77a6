//! Execution lifecycle recording.
//!
//! The runner reports job and step lifecycle events through an
//! [`ExecutionRecorder`]. The default [`NoopRecorder`] discards them;
//! [`MemoryRecorder`] keeps them for inspection (the verbose run timeline,
//! tests). Recorders never fail: a collaborator that persists events must
//! handle its own errors.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::runner::JobStatus;
use crate::steps::StepStatus;

/// Lifecycle hooks invoked by the runner.
///
/// Hooks take `&self`; implementations use interior mutability where they
/// accumulate state.
pub trait ExecutionRecorder: Send + Sync {
    /// A job run is starting.
    fn job_started(&self, job: &str);

    /// A step is about to execute.
    fn step_started(&self, step: &str);

    /// A step finished with the given status.
    fn step_finished(&self, step: &str, status: StepStatus);

    /// The job run finished with the given status.
    fn job_finished(&self, job: &str, status: JobStatus);
}

/// Recorder that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecorder;

impl ExecutionRecorder for NoopRecorder {
    fn job_started(&self, _job: &str) {}
    fn step_started(&self, _step: &str) {}
    fn step_finished(&self, _step: &str, _status: StepStatus) {}
    fn job_finished(&self, _job: &str, _status: JobStatus) {}
}

/// A single recorded lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionEvent {
    JobStarted { job: String },
    StepStarted { step: String },
    StepFinished { step: String, status: StepStatus },
    JobFinished { job: String, status: JobStatus },
}

impl fmt::Display for ExecutionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionEvent::JobStarted { job } => write!(f, "job '{}' started", job),
            ExecutionEvent::StepStarted { step } => write!(f, "step '{}' started", step),
            ExecutionEvent::StepFinished { step, status } => {
                write!(f, "step '{}' finished ({})", step, status)
            }
            ExecutionEvent::JobFinished { job, status } => {
                write!(f, "job '{}' finished ({})", job, status)
            }
        }
    }
}

/// Recorder that appends events to an in-memory log.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    events: Mutex<Vec<ExecutionEvent>>,
}

impl MemoryRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, in order.
    pub fn events(&self) -> Vec<ExecutionEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, event: ExecutionEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl ExecutionRecorder for MemoryRecorder {
    fn job_started(&self, job: &str) {
        self.push(ExecutionEvent::JobStarted {
            job: job.to_string(),
        });
    }

    fn step_started(&self, step: &str) {
        self.push(ExecutionEvent::StepStarted {
            step: step.to_string(),
        });
    }

    fn step_finished(&self, step: &str, status: StepStatus) {
        self.push(ExecutionEvent::StepFinished {
            step: step.to_string(),
            status,
        });
    }

    fn job_finished(&self, job: &str, status: JobStatus) {
        self.push(ExecutionEvent::JobFinished {
            job: job.to_string(),
            status,
        });
    }
}

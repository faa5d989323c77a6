//! Job execution orchestration.
//!
//! [`JobRunner`] executes a job's steps in declared order, synchronously and
//! strictly one at a time, stopping at the first failure. The outcome is a
//! [`JobExecution`]: which steps were attempted and the terminal status.
//! Step failures are data in the execution, not errors from `run`.

pub mod report;

pub use report::{RunRecord, StepRecord};

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::job::Job;
use crate::recorder::{ExecutionRecorder, NoopRecorder};
use crate::steps::{execute_step, StepResult, StepStatus};

/// Terminal status of a job run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// All steps completed successfully.
    Completed,

    /// A step failed; subsequent steps were not executed.
    Failed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of running a [`Job`] once.
///
/// Created fresh for every run and discarded after being reported.
#[derive(Debug)]
pub struct JobExecution {
    /// Job name.
    pub job: String,

    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// Total duration.
    pub duration: Duration,

    /// Results of the steps that were attempted, in execution order.
    pub steps: Vec<StepResult>,

    /// Terminal status.
    pub status: JobStatus,
}

impl JobExecution {
    /// Whether every step completed.
    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }

    /// Error message of the failing step, if any.
    pub fn failure_reason(&self) -> Option<&str> {
        self.steps
            .iter()
            .find(|s| s.status == StepStatus::Failed)
            .and_then(|s| s.error.as_deref())
    }
}

/// Executes a job's steps in declared order, stopping at the first failure.
pub struct JobRunner {
    recorder: Arc<dyn ExecutionRecorder>,
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl JobRunner {
    /// Create a runner that discards lifecycle events.
    pub fn new() -> Self {
        Self {
            recorder: Arc::new(NoopRecorder),
        }
    }

    /// Create a runner that reports lifecycle events to `recorder`.
    pub fn with_recorder(recorder: Arc<dyn ExecutionRecorder>) -> Self {
        Self { recorder }
    }

    /// Run `job` once.
    ///
    /// A step failure does not abort the call: it is captured in the
    /// returned [`JobExecution`] and the remaining steps are not executed.
    /// Running the same job repeatedly yields the same result.
    pub fn run(&self, job: &Job) -> JobExecution {
        let started_at = Utc::now();
        let start = Instant::now();

        debug!("Running job '{}' ({} steps)", job.name(), job.steps().len());
        self.recorder.job_started(job.name());

        let mut results = Vec::new();
        let mut status = JobStatus::Completed;

        for step in job.steps() {
            self.recorder.step_started(step.name());

            let result = execute_step(step);
            self.recorder.step_finished(step.name(), result.status);

            let failed = result.status == StepStatus::Failed;
            if failed {
                warn!(
                    "Step '{}' failed: {}",
                    step.name(),
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);

            if failed {
                status = JobStatus::Failed;
                break;
            }
        }

        self.recorder.job_finished(job.name(), status);
        debug!("Job '{}' {}", job.name(), status);

        JobExecution {
            job: job.name().to_string(),
            started_at,
            duration: start.elapsed(),
            steps: results,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::Step;

    fn ok_step(name: &str) -> Step {
        Step::new(name, || -> anyhow::Result<()> { Ok(()) })
    }

    fn failing_step(name: &str, message: &'static str) -> Step {
        Step::new(name, move || -> anyhow::Result<()> {
            anyhow::bail!(message)
        })
    }

    fn two_ok_steps() -> Job {
        Job::builder("j")
            .step(ok_step("a"))
            .step(ok_step("b"))
            .build()
            .unwrap()
    }

    #[test]
    fn all_steps_succeed_yields_completed() {
        let job = two_ok_steps();
        let execution = JobRunner::new().run(&job);

        assert!(execution.is_completed());
        assert_eq!(execution.status, JobStatus::Completed);
        assert_eq!(execution.steps.len(), 2);
        assert_eq!(execution.steps[0].name, "a");
        assert_eq!(execution.steps[1].name, "b");
        assert!(execution.failure_reason().is_none());
    }

    #[test]
    fn first_failure_halts_remaining_steps() {
        let job = Job::builder("j")
            .step(ok_step("a"))
            .step(failing_step("b", "broke"))
            .step(ok_step("c"))
            .build()
            .unwrap();

        let execution = JobRunner::new().run(&job);

        assert_eq!(execution.status, JobStatus::Failed);
        assert_eq!(execution.steps.len(), 2);
        assert_eq!(execution.steps[1].name, "b");
        assert_eq!(execution.failure_reason(), Some("broke"));
    }

    #[test]
    fn repeated_runs_yield_identical_results() {
        let job = two_ok_steps();
        let runner = JobRunner::new();

        let first = runner.run(&job);
        let second = runner.run(&job);

        assert_eq!(first.status, second.status);
        assert_eq!(
            first.steps.iter().map(|s| &s.name).collect::<Vec<_>>(),
            second.steps.iter().map(|s| &s.name).collect::<Vec<_>>()
        );
    }

    #[test]
    fn default_runner_matches_new() {
        let job = two_ok_steps();
        let execution = JobRunner::default().run(&job);
        assert!(execution.is_completed());
    }

    #[test]
    fn job_status_display() {
        assert_eq!(format!("{}", JobStatus::Completed), "completed");
        assert_eq!(format!("{}", JobStatus::Failed), "failed");
    }
}

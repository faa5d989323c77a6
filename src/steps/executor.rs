//! Step execution engine.
//!
//! Runs a single step's action and converts the outcome into a
//! [`StepResult`]. An action that returns an error or panics yields a failed
//! result; panics do not propagate past the executor.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::Step;

/// Terminal status of an executed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Step completed successfully.
    Completed,

    /// Step failed.
    Failed,
}

impl StepStatus {
    /// Get a display character for this status.
    pub fn display_char(&self) -> char {
        match self {
            StepStatus::Completed => '✓',
            StepStatus::Failed => '✗',
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Result of executing a step.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Step name.
    pub name: String,

    /// Terminal status.
    pub status: StepStatus,

    /// Execution duration.
    pub duration: Duration,

    /// Error message (if failed).
    pub error: Option<String>,
}

impl StepResult {
    /// Create a success result.
    pub fn success(name: &str, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Completed,
            duration,
            error: None,
        }
    }

    /// Create a failure result.
    pub fn failure(name: &str, duration: Duration, error: String) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Failed,
            duration,
            error: Some(error),
        }
    }
}

/// Execute a single step.
///
/// The action runs on the calling thread. A panic inside the action is
/// caught and reported as a step failure carrying the panic message.
pub fn execute_step(step: &Step) -> StepResult {
    let start = Instant::now();

    match panic::catch_unwind(AssertUnwindSafe(|| step.action().execute())) {
        Ok(Ok(())) => StepResult::success(step.name(), start.elapsed()),
        Ok(Err(e)) => StepResult::failure(step.name(), start.elapsed(), format!("{e:#}")),
        Err(payload) => {
            StepResult::failure(step.name(), start.elapsed(), panic_message(payload.as_ref()))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("step panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("step panicked: {}", s)
    } else {
        "step panicked".to_string()
    }
}

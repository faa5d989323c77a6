//! Step definition and execution.
//!
//! This module provides the step primitives:
//!
//! - [`Step`] - A named unit of work within a job
//! - [`StepAction`] - The work itself: a zero-argument, fallible action
//! - [`execute_step`] - Run one step, containing action errors and panics
//! - [`StepStatus`] - Terminal status of an executed step
//! - [`StepResult`] - Capture of one step execution
//!
//! # Example
//!
//! ```
//! use cairn::steps::{execute_step, Step, StepStatus};
//!
//! let step = Step::new("greet", || -> anyhow::Result<()> {
//!     println!("hello");
//!     Ok(())
//! });
//!
//! let result = execute_step(&step);
//! assert_eq!(result.status, StepStatus::Completed);
//! ```

pub mod executor;

pub use executor::{execute_step, StepResult, StepStatus};

use std::fmt;

/// A single callable unit of work, executed once per step invocation.
///
/// Actions take no input and produce no output value; they report completion
/// by returning `Ok(())` and failure by returning an error. Implemented for
/// any matching closure.
pub trait StepAction: Send + Sync {
    /// Run the action once.
    fn execute(&self) -> anyhow::Result<()>;
}

impl<F> StepAction for F
where
    F: Fn() -> anyhow::Result<()> + Send + Sync,
{
    fn execute(&self) -> anyhow::Result<()> {
        self()
    }
}

/// A named step within a job.
///
/// Steps are constructed once at setup time and are immutable afterwards.
pub struct Step {
    name: String,
    action: Box<dyn StepAction>,
}

impl Step {
    /// Create a step from a name and an action.
    pub fn new(name: impl Into<String>, action: impl StepAction + 'static) -> Self {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    /// Step name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The step's action.
    pub fn action(&self) -> &dyn StepAction {
        self.action.as_ref()
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("name", &self.name).finish()
    }
}

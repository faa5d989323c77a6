//! Job definition and construction.
//!
//! A [`Job`] is a named, ordered collection of steps executed as a unit.
//! Jobs are built once at process start through [`JobBuilder`], which
//! validates the definition, and are immutable afterwards: step order is
//! fixed at construction and never reordered at runtime.

pub mod builtin;

pub use builtin::{builtin_jobs, hello_job};

use std::collections::HashSet;
use std::fmt;

use crate::error::{CairnError, Result};
use crate::steps::Step;

/// A named, ordered collection of steps executed as a unit.
pub struct Job {
    name: String,
    steps: Vec<Step>,
}

impl Job {
    /// Start building a job with the given name.
    pub fn builder(name: impl Into<String>) -> JobBuilder {
        JobBuilder {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Job name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Steps in declared execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step names in declared execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }
}

impl fmt::Debug for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Job")
            .field("name", &self.name)
            .field("steps", &self.step_names())
            .finish()
    }
}

/// Builder for [`Job`].
#[derive(Debug)]
pub struct JobBuilder {
    name: String,
    steps: Vec<Step>,
}

impl JobBuilder {
    /// Append a step to the end of the sequence.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Finalize the job.
    ///
    /// Fails if the job has no steps or if a step name repeats.
    pub fn build(self) -> Result<Job> {
        if self.steps.is_empty() {
            return Err(CairnError::EmptyJob { job: self.name });
        }

        let mut seen = HashSet::new();
        for step in &self.steps {
            if !seen.insert(step.name()) {
                return Err(CairnError::DuplicateStep {
                    job: self.name.clone(),
                    step: step.name().to_string(),
                });
            }
        }

        Ok(Job {
            name: self.name,
            steps: self.steps,
        })
    }
}

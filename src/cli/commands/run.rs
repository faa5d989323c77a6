//! Run command implementation.
//!
//! The `cairn run` command executes a registered job once and reports the
//! outcome: a themed summary by default, the run record as JSON with
//! `--json`, and the recorded event timeline with `--verbose`.

use std::sync::Arc;

use crate::cli::args::RunArgs;
use crate::error::{CairnError, Result};
use crate::job::Job;
use crate::recorder::MemoryRecorder;
use crate::runner::{JobRunner, JobStatus, RunRecord};
use crate::steps::StepStatus;
use crate::ui::{format_duration, CairnTheme, OutputMode};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand<'a> {
    jobs: &'a [Job],
    args: RunArgs,
    output_mode: OutputMode,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command over the registered jobs.
    pub fn new(jobs: &'a [Job], args: RunArgs, output_mode: OutputMode) -> Self {
        Self {
            jobs,
            args,
            output_mode,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    fn find_job(&self) -> Result<&'a Job> {
        self.jobs
            .iter()
            .find(|job| job.name() == self.args.job)
            .ok_or_else(|| CairnError::UnknownJob {
                name: self.args.job.clone(),
            })
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        let job = self.find_job()?;

        let recorder = Arc::new(MemoryRecorder::new());
        let runner = JobRunner::with_recorder(recorder.clone());
        let execution = runner.run(job);

        if self.args.json {
            let record = RunRecord::from(&execution);
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else if self.output_mode != OutputMode::Quiet {
            let theme = CairnTheme::new();

            for step in &execution.steps {
                match step.status {
                    StepStatus::Completed => {
                        println!(
                            "  {}",
                            theme.format_success(&format!(
                                "{} ({})",
                                step.name,
                                format_duration(step.duration)
                            ))
                        );
                    }
                    StepStatus::Failed => {
                        println!(
                            "  {}",
                            theme.format_error(&format!(
                                "{} - {}",
                                step.name,
                                step.error.as_deref().unwrap_or("unknown error")
                            ))
                        );
                    }
                }
            }

            if self.output_mode == OutputMode::Verbose {
                println!("  {}", theme.key.apply_to("Recorded events:"));
                for event in recorder.events() {
                    println!("    {}", theme.dim.apply_to(event.to_string()));
                }
            }

            match execution.status {
                JobStatus::Completed => {
                    println!(
                        "{}",
                        theme.format_success(&format!(
                            "Job '{}' completed in {}",
                            execution.job,
                            format_duration(execution.duration)
                        ))
                    );
                }
                JobStatus::Failed => {
                    println!(
                        "{}",
                        theme.format_error(&format!(
                            "Job '{}' failed: {}",
                            execution.job,
                            execution.failure_reason().unwrap_or("unknown error")
                        ))
                    );
                }
            }
        }

        if execution.is_completed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

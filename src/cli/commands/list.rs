//! List command implementation.
//!
//! The `cairn list` command lists registered jobs and their step order.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::job::Job;
use crate::ui::CairnTheme;

use super::dispatcher::{Command, CommandResult};

/// Serializable job entry for `--json` output.
#[derive(Debug, Serialize)]
struct JobEntry<'a> {
    name: &'a str,
    steps: Vec<&'a str>,
}

/// The list command implementation.
pub struct ListCommand<'a> {
    jobs: &'a [Job],
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command over the registered jobs.
    pub fn new(jobs: &'a [Job], args: ListArgs) -> Self {
        Self { jobs, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        if self.args.json {
            let entries: Vec<JobEntry> = self
                .jobs
                .iter()
                .map(|job| JobEntry {
                    name: job.name(),
                    steps: job.step_names(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(CommandResult::success());
        }

        let theme = CairnTheme::new();

        println!("  {}", theme.key.apply_to("Jobs:"));
        for job in self.jobs {
            let chain = job.step_names().join(" → ");
            println!(
                "    {}{} {}",
                theme.highlight.apply_to(job.name()),
                theme.dim.apply_to(":"),
                theme.dim.apply_to(&chain)
            );
        }

        Ok(CommandResult::success())
    }
}

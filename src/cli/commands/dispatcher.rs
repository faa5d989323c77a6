//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::error::Result;
use crate::job::Job;
use crate::ui::OutputMode;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
///
/// Owns the job catalog built at process start; commands borrow it.
pub struct CommandDispatcher {
    jobs: Vec<Job>,
    output_mode: OutputMode,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the registered jobs.
    pub fn new(jobs: Vec<Job>, output_mode: OutputMode) -> Self {
        Self { jobs, output_mode }
    }

    /// The registered jobs.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. With no subcommand, runs the default job.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(&self.jobs, args.clone(), self.output_mode);
                cmd.execute()
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.jobs, args.clone());
                cmd.execute()
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute()
            }
            None => {
                let cmd =
                    super::run::RunCommand::new(&self.jobs, RunArgs::default(), self.output_mode);
                cmd.execute()
            }
        }
    }
}

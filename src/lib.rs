//! Cairn - Minimal sequential batch job runner.
//!
//! Cairn executes a named job as an ordered sequence of steps, strictly one
//! after another, stopping at the first failure. The process exit code
//! reflects the outcome: 0 when every step completed, non-zero otherwise.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`job`] - Job definition, construction, and the builtin catalog
//! - [`recorder`] - Execution lifecycle recording
//! - [`runner`] - Job execution orchestration and run reports
//! - [`steps`] - Step definition and execution
//! - [`ui`] - Terminal output helpers
//!
//! # Example
//!
//! ```
//! use cairn::job::Job;
//! use cairn::runner::JobRunner;
//! use cairn::steps::Step;
//!
//! let job = Job::builder("greet")
//!     .step(Step::new("hello", || -> anyhow::Result<()> {
//!         println!("hello");
//!         Ok(())
//!     }))
//!     .build()
//!     .unwrap();
//!
//! let execution = JobRunner::new().run(&job);
//! assert!(execution.is_completed());
//! ```

pub mod cli;
pub mod error;
pub mod job;
pub mod recorder;
pub mod runner;
pub mod steps;
pub mod ui;

pub use error::{CairnError, Result};

//! Builtin job catalog.
//!
//! Jobs are wired here explicitly at process start; there is no external
//! configuration format. `main` builds this catalog once and hands it to the
//! command dispatcher.

use tracing::info;

use crate::error::Result;
use crate::steps::Step;

use super::Job;

/// All jobs known to the binary.
pub fn builtin_jobs() -> Result<Vec<Job>> {
    Ok(vec![hello_job()?])
}

/// The `myJob` sample job: two steps that each log a greeting banner and
/// unconditionally succeed.
pub fn hello_job() -> Result<Job> {
    Job::builder("myJob")
        .step(hello_step("helloStep1", "Hello, Spring Batch 1!"))
        .step(hello_step("helloStep2", "Hello, Spring Batch 2!"))
        .build()
}

/// A step that logs `message` between separator lines.
fn hello_step(name: &str, message: &'static str) -> Step {
    Step::new(name, move || -> anyhow::Result<()> {
        info!("======================");
        info!(" >> {}", message);
        info!("======================");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_hello_job() {
        let jobs = builtin_jobs().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name(), "myJob");
    }

    #[test]
    fn hello_job_has_two_steps_in_order() {
        let job = hello_job().unwrap();
        assert_eq!(job.step_names(), vec!["helloStep1", "helloStep2"]);
    }

    #[test]
    fn hello_steps_always_succeed() {
        let job = hello_job().unwrap();
        for step in job.steps() {
            assert!(step.action().execute().is_ok());
        }
    }
}

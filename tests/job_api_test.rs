//! Integration tests for the job execution API.
//!
//! Exercises the public surface the way an embedding program would: build a
//! job, run it, inspect the execution, the recorded events, and the report.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cairn::job::{builtin_jobs, hello_job, Job};
use cairn::recorder::{ExecutionEvent, MemoryRecorder};
use cairn::runner::{JobRunner, JobStatus, RunRecord};
use cairn::steps::{Step, StepStatus};

fn ok_step(name: &str) -> Step {
    Step::new(name, || -> anyhow::Result<()> { Ok(()) })
}

fn failing_step(name: &str, message: &'static str) -> Step {
    Step::new(name, move || -> anyhow::Result<()> {
        anyhow::bail!(message)
    })
}

#[test]
fn hello_job_completes_with_two_steps_in_order() {
    let job = hello_job().unwrap();
    let execution = JobRunner::new().run(&job);

    assert!(execution.is_completed());
    assert_eq!(execution.steps.len(), 2);
    assert_eq!(execution.steps[0].name, "helloStep1");
    assert_eq!(execution.steps[1].name, "helloStep2");
}

#[test]
fn steps_after_a_failure_never_execute() {
    let ran = Arc::new(AtomicBool::new(false));
    let probe = ran.clone();

    let job = Job::builder("j")
        .step(ok_step("first"))
        .step(failing_step("second", "broke"))
        .step(Step::new("third", move || -> anyhow::Result<()> {
            probe.store(true, Ordering::SeqCst);
            Ok(())
        }))
        .build()
        .unwrap();

    let execution = JobRunner::new().run(&job);

    assert_eq!(execution.status, JobStatus::Failed);
    assert_eq!(execution.steps.len(), 2);
    assert_eq!(execution.failure_reason(), Some("broke"));
    assert!(!ran.load(Ordering::SeqCst), "third step must not run");
}

#[test]
fn panicking_action_is_a_step_failure() {
    let job = Job::builder("j")
        .step(Step::new("boom", || -> anyhow::Result<()> {
            panic!("kaboom")
        }))
        .step(ok_step("after"))
        .build()
        .unwrap();

    let execution = JobRunner::new().run(&job);

    assert_eq!(execution.status, JobStatus::Failed);
    assert_eq!(execution.steps.len(), 1);
    assert!(execution.failure_reason().unwrap().contains("kaboom"));
}

#[test]
fn repeated_runs_are_idempotent() {
    let job = hello_job().unwrap();
    let runner = JobRunner::new();

    let first = runner.run(&job);
    let second = runner.run(&job);

    assert_eq!(first.status, JobStatus::Completed);
    assert_eq!(second.status, JobStatus::Completed);
    assert_eq!(
        first.steps.iter().map(|s| &s.name).collect::<Vec<_>>(),
        second.steps.iter().map(|s| &s.name).collect::<Vec<_>>()
    );
}

#[test]
fn recorder_sees_events_in_lifecycle_order() {
    let recorder = Arc::new(MemoryRecorder::new());
    let runner = JobRunner::with_recorder(recorder.clone());

    let job = hello_job().unwrap();
    runner.run(&job);

    assert_eq!(
        recorder.events(),
        vec![
            ExecutionEvent::JobStarted {
                job: "myJob".into()
            },
            ExecutionEvent::StepStarted {
                step: "helloStep1".into()
            },
            ExecutionEvent::StepFinished {
                step: "helloStep1".into(),
                status: StepStatus::Completed,
            },
            ExecutionEvent::StepStarted {
                step: "helloStep2".into()
            },
            ExecutionEvent::StepFinished {
                step: "helloStep2".into(),
                status: StepStatus::Completed,
            },
            ExecutionEvent::JobFinished {
                job: "myJob".into(),
                status: JobStatus::Completed,
            },
        ]
    );
}

#[test]
fn recorder_stops_at_the_failing_step() {
    let recorder = Arc::new(MemoryRecorder::new());
    let runner = JobRunner::with_recorder(recorder.clone());

    let job = Job::builder("j")
        .step(failing_step("first", "broke"))
        .step(ok_step("second"))
        .build()
        .unwrap();

    runner.run(&job);

    let events = recorder.events();
    assert_eq!(
        events,
        vec![
            ExecutionEvent::JobStarted { job: "j".into() },
            ExecutionEvent::StepStarted {
                step: "first".into()
            },
            ExecutionEvent::StepFinished {
                step: "first".into(),
                status: StepStatus::Failed,
            },
            ExecutionEvent::JobFinished {
                job: "j".into(),
                status: JobStatus::Failed,
            },
        ]
    );
}

#[test]
fn run_record_projects_the_execution() {
    let job = hello_job().unwrap();
    let execution = JobRunner::new().run(&job);

    let record = RunRecord::from(&execution);

    assert_eq!(record.job, "myJob");
    assert_eq!(record.status, JobStatus::Completed);
    assert_eq!(record.steps.len(), 2);
    assert!(record.error.is_none());
}

#[test]
fn builtin_catalog_registers_the_hello_job() {
    let jobs = builtin_jobs().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].name(), "myJob");
    assert_eq!(jobs[0].step_names(), vec!["helloStep1", "helloStep2"]);
}

//! Error types for Cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CairnError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CairnError::Other`) for step action errors
//! - A step failing during a run is not an error at this level: it is
//!   captured in the run result and reported through the normal output
//!   channel

use thiserror::Error;

/// Core error type for Cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// Job was defined without any steps.
    #[error("Job '{job}' has no steps")]
    EmptyJob { job: String },

    /// Two steps in the same job share a name.
    #[error("Job '{job}' defines step '{step}' more than once")]
    DuplicateStep { job: String, step: String },

    /// Requested job is not registered.
    #[error("Unknown job: {name}")]
    UnknownJob { name: String },

    /// Failed to serialize a run report.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;

//! Error types for the application.
//!
//! - [`AnimationError`] - Malformed animation configuration (fatal for the section)
//! - [`ObserverError`] - Viewport observation unavailable (the region fails open)
//! - [`ValidationError`] - A submission field violating its rule

use thiserror::Error;

use crate::models::SubmissionField;

/// Animation configuration that the animators refuse to run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("statistic target must not be negative (got {0})")]
    NegativeTarget(i64),
    #[error("counter animation needs at least one step")]
    ZeroSteps,
    #[error("counter animation duration must be positive")]
    ZeroDuration,
    #[error("reveal threshold must be within 0.0..=1.0 (got {0})")]
    InvalidThreshold(f64),
}

/// Viewport observation could not be set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserverError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Host environment lacks `IntersectionObserver`
    #[error("IntersectionObserver is not supported")]
    Unsupported,
    /// Constructor or `observe` call threw
    #[error("failed to observe element: {0}")]
    ObserveFailed(String),
}

/// A single field failing validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: SubmissionField,
    pub message: String,
}

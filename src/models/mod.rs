//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Resource`], [`Category`], [`CategoryFilter`] - Directory entries and their classification
//! - [`Statistic`], [`StatIcon`] - Count-up targets for the impact section
//! - [`ResourceSubmission`], [`SubmissionField`] - Submission form data
//! - [`Toast`], [`ToastQueue`] - Transient notifications

mod resource;
mod stat;
mod submission;
mod toast;

pub use resource::{Category, CategoryFilter, Resource};
pub use stat::{StatIcon, Statistic};
pub use submission::{ResourceSubmission, SubmissionField};
pub use toast::{Toast, ToastKind, ToastQueue};

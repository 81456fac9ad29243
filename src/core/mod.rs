//! Core logic of the community hub, free of any browser dependency.
//!
//! This module provides:
//! - [`DirectoryFilter`] search and category filtering
//! - [`Reveal`] one-way entrance state for scroll-revealed sections
//! - [`CounterGroup`] stepped count-up animation
//! - [`validation`] of resource submissions

mod counter;
mod directory;
pub mod error;
mod reveal;
pub mod validation;

pub use counter::{CounterGroup, CounterTiming};
pub use directory::DirectoryFilter;
pub use error::AnimationError;
pub use reveal::{Intersection, Reveal, Transition};

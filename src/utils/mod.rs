//! Utility modules for DOM access, browser subscriptions and formatting.
//!
//! Provides:
//! - [`ViewportObserver`], [`WindowListener`] - Browser subscriptions released on drop
//! - [`format_count`], [`pluralize`] - Display formatting
//! - [`parse_web_url`] - URL shape validation

pub mod dom;
pub mod format;
mod observer;
mod url;

pub use format::{format_count, overflow_label, pluralize};
pub use observer::{ViewportObserver, WindowListener};
pub use url::parse_web_url;

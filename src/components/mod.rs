//! UI components built with Leptos.
//!
//! - [`Hero`] - Parallax banner with scroll shortcuts
//! - [`FeaturedResources`] - Featured-partner showcase
//! - [`CommunityStats`] - Count-up impact statistics
//! - [`ResourceDirectory`] - Searchable, filterable directory
//! - [`SubmitResourceForm`] - Validated submission form
//! - [`Footer`] - Site footer
//! - [`Toaster`] - Transient notifications
//! - [`hooks`] - Reveal, count-up and scroll hooks
//! - [`icons`] - Centralized icon definitions (change theme here)

mod directory;
mod featured;
mod footer;
mod hero;
pub mod hooks;
pub mod icons;
mod stats;
mod submit;
mod toast;

pub use directory::ResourceDirectory;
pub use featured::FeaturedResources;
pub use footer::Footer;
pub use hero::Hero;
pub use stats::CommunityStats;
pub use submit::SubmitResourceForm;
pub use toast::Toaster;

/// Join a base class with a conditional one.
pub(crate) fn classes(base: &str, extra: &str, on: bool) -> String {
    if on {
        format!("{} {}", base, extra)
    } else {
        base.to_string()
    }
}

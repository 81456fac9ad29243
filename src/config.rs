//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::models::{StatIcon, Statistic};

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name shown in the footer.
pub const APP_NAME: &str = "Coppell Community Hub";

/// Place the directory serves.
pub const CITY: &str = "Coppell, Texas";

/// Official city website linked from the footer.
pub const CITY_URL: &str = "https://coppelltx.gov";

/// Console log verbosity.
pub const LOG_LEVEL: log::Level = log::Level::Info;

// =============================================================================
// Page Anchors
// =============================================================================

/// Element id of the resource directory section.
pub const RESOURCES_ANCHOR: &str = "resources";

/// Element id of the submission form section.
pub const SUBMIT_ANCHOR: &str = "submit";

// =============================================================================
// Animation Configuration
// =============================================================================

/// Count-up animation for the impact statistics.
pub mod counter {
    /// Total wall-clock time of the count-up.
    pub const DURATION_MS: u32 = 2000;
    /// Number of equal steps (one tick every `DURATION_MS / STEPS` ms).
    pub const STEPS: u32 = 60;
}

/// Fraction of a section that must be on screen before it is revealed.
pub mod reveal {
    pub const FEATURED: f64 = 0.1;
    pub const STATS: f64 = 0.3;
    pub const DIRECTORY: f64 = 0.1;
}

/// Per-item transition delays for staggered entrances (milliseconds).
pub mod stagger {
    pub const FEATURED_CARD_MS: u32 = 200;
    pub const STAT_CARD_MS: u32 = 100;
    pub const DIRECTORY_CARD_BASE_MS: u32 = 300;
    pub const DIRECTORY_CARD_MS: u32 = 50;
}

/// Hero banner parallax and decoration.
pub mod hero {
    /// Background moves at this fraction of the scroll offset.
    pub const BACKGROUND_PARALLAX: f64 = 0.5;
    /// Headline block moves at this fraction of the scroll offset.
    pub const CONTENT_PARALLAX: f64 = 0.3;
    /// Number of decorative stars.
    pub const STAR_COUNT: usize = 20;
}

// =============================================================================
// Directory Configuration
// =============================================================================

/// Service tags shown on a directory card before collapsing into "+N".
pub const DIRECTORY_VISIBLE_SERVICES: usize = 3;

// =============================================================================
// Submission Configuration
// =============================================================================

/// Simulated network latency of a submission.
pub const SUBMIT_DELAY_MS: u32 = 1500;

/// Toast notification settings.
pub mod toast {
    /// Time before a toast dismisses itself.
    pub const DISMISS_MS: u32 = 4000;
    /// Maximum number of toasts on screen at once.
    pub const MAX_VISIBLE: usize = 3;
}

// =============================================================================
// Statistics
// =============================================================================

/// Community impact figures animated in the stats section.
pub const STATS: [Statistic; 4] = [
    Statistic {
        icon: StatIcon::Building,
        target: 50,
        suffix: "+",
        label: "Community Resources",
        description: "Organizations serving Coppell",
    },
    Statistic {
        icon: StatIcon::People,
        target: 45_000,
        suffix: "+",
        label: "Residents Served",
        description: "People helped annually",
    },
    Statistic {
        icon: StatIcon::Calendar,
        target: 200,
        suffix: "+",
        label: "Community Events",
        description: "Programs each year",
    },
    Statistic {
        icon: StatIcon::Heart,
        target: 5_000,
        suffix: "+",
        label: "Volunteer Hours",
        description: "Given back monthly",
    },
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CounterGroup, CounterTiming, Reveal};

    #[test]
    fn test_animation_constants_are_valid() {
        let timing = CounterTiming::new(counter::DURATION_MS, counter::STEPS).unwrap();
        assert!(CounterGroup::new(STATS.iter().map(|s| s.target), timing).is_ok());
        for threshold in [reveal::FEATURED, reveal::STATS, reveal::DIRECTORY] {
            assert!(Reveal::new(threshold).is_ok());
        }
    }
}

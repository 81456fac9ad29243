//! Community statistics shown in the impact section.

/// Icon shown above a statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Building,
    People,
    Calendar,
    Heart,
}

/// A labeled numeric target used for the count-up display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Statistic {
    pub icon: StatIcon,
    pub target: i64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

//! Directory resource types.

use std::fmt;

/// Classification tag attached to every resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    NonProfits,
    HealthServices,
    Education,
    CommunityPrograms,
    SupportServices,
    YouthServices,
    SeniorServices,
    EmergencyServices,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 8] = [
        Category::NonProfits,
        Category::HealthServices,
        Category::Education,
        Category::CommunityPrograms,
        Category::SupportServices,
        Category::YouthServices,
        Category::SeniorServices,
        Category::EmergencyServices,
    ];

    /// Human-readable label, as shown on badges and filter pills.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NonProfits => "Non-Profits",
            Self::HealthServices => "Health Services",
            Self::Education => "Education",
            Self::CommunityPrograms => "Community Programs",
            Self::SupportServices => "Support Services",
            Self::YouthServices => "Youth Services",
            Self::SeniorServices => "Senior Services",
            Self::EmergencyServices => "Emergency Services",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selection in the directory.
///
/// `All` is the reserved sentinel meaning "no category filter"; it can never
/// be attached to a resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selectable filter options in display order (sentinel first).
    pub const OPTIONS: [CategoryFilter; 9] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::NonProfits),
        CategoryFilter::Only(Category::HealthServices),
        CategoryFilter::Only(Category::Education),
        CategoryFilter::Only(Category::CommunityPrograms),
        CategoryFilter::Only(Category::SupportServices),
        CategoryFilter::Only(Category::YouthServices),
        CategoryFilter::Only(Category::SeniorServices),
        CategoryFilter::Only(Category::EmergencyServices),
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Resources",
            Self::Only(category) => category.label(),
        }
    }

    /// Whether a resource in `category` passes this selection.
    #[inline]
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One directory entry.
///
/// Records are compiled into the binary (see [`crate::data::RESOURCES`]) and
/// never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resource {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub hours: &'static str,
    pub services: &'static [&'static str],
    pub featured: bool,
}

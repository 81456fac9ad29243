//! Resource directory search and category filtering.
//!
//! A resource is shown when it passes both predicates:
//! - category: the selection is `All`, or equals the resource's category
//! - text: the query is a case-insensitive substring of the name, the
//!   description, or any service tag (empty query always passes)

use crate::models::{CategoryFilter, Resource};

/// Current directory search state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl DirectoryFilter {
    #[cfg(test)]
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Returns the matching resources, keeping their original order.
    pub fn apply<'a, I>(&self, resources: I) -> FilterOutcome<'a>
    where
        I: IntoIterator<Item = &'a Resource>,
    {
        let needle = self.query.to_lowercase();
        let matches = resources
            .into_iter()
            .filter(|r| self.category.admits(r.category) && text_matches(r, &needle))
            .collect();
        FilterOutcome { matches }
    }
}

/// Check whether any searchable field of a resource contains the
/// (already lowercased) needle.
fn text_matches(resource: &Resource, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    contains(resource.name, needle)
        || contains(resource.description, needle)
        || resource.services.iter().any(|s| contains(s, needle))
}

#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Result of applying a [`DirectoryFilter`].
///
/// An empty outcome is a normal state ("no matches"), not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    matches: Vec<&'a Resource>,
}

impl<'a> FilterOutcome<'a> {
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Resource> + '_ {
        self.matches.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RESOURCES;
    use crate::models::Category;

    fn names<'a>(outcome: &FilterOutcome<'a>) -> Vec<&'a str> {
        outcome.iter().map(|r| r.name).collect()
    }

    fn is_ordered_subsequence(sub: &[&Resource], all: &[Resource]) -> bool {
        let mut rest = all.iter();
        sub.iter().all(|s| rest.any(|r| r.id == s.id))
    }

    fn sample_queries() -> Vec<&'static str> {
        vec!["", "coppell", "PARK", "youth", "therapy", "a", "zzz-no-match", "Community Events"]
    }

    #[test]
    fn test_empty_query_all_returns_everything() {
        let outcome = DirectoryFilter::default().apply(RESOURCES);
        assert_eq!(outcome.count(), RESOURCES.len());
        assert!(outcome.iter().zip(RESOURCES).all(|(a, b)| a == b));
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        for query in sample_queries() {
            for category in CategoryFilter::OPTIONS {
                let outcome = DirectoryFilter::new(query, category).apply(RESOURCES);
                assert!(
                    is_ordered_subsequence(&outcome.iter().collect::<Vec<_>>(), RESOURCES),
                    "query={query:?} category={category}"
                );
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for query in sample_queries() {
            for category in CategoryFilter::OPTIONS {
                let filter = DirectoryFilter::new(query, category);
                let once = filter.apply(RESOURCES);
                let twice = filter.apply(once.iter());
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_name_substring_is_included() {
        for resource in RESOURCES {
            let fragment = &resource.name[resource.name.len() / 2..];
            for category in [CategoryFilter::All, CategoryFilter::Only(resource.category)] {
                let outcome = DirectoryFilter::new(fragment.to_uppercase(), category).apply(RESOURCES);
                assert!(outcome.iter().any(|r| r.id == resource.id));
            }
        }
    }

    #[test]
    fn test_health_services_category() {
        let outcome =
            DirectoryFilter::new("", CategoryFilter::Only(Category::HealthServices)).apply(RESOURCES);
        assert_eq!(
            names(&outcome),
            vec!["Coppell Family YMCA", "Coppell Mental Health Services"]
        );
    }

    #[test]
    fn test_park_ignores_address() {
        // Several addresses are on "Parkway Blvd"; only the name should match.
        let outcome = DirectoryFilter::new("park", CategoryFilter::All).apply(RESOURCES);
        assert_eq!(names(&outcome), vec!["Coppell Nature Park"]);
    }

    #[test]
    fn test_matches_service_tags() {
        let outcome = DirectoryFilter::new("group therapy", CategoryFilter::All).apply(RESOURCES);
        assert_eq!(names(&outcome), vec!["Coppell Mental Health Services"]);
    }

    #[test]
    fn test_matches_description() {
        let outcome = DirectoryFilter::new("ARTISANS", CategoryFilter::All).apply(RESOURCES);
        assert_eq!(names(&outcome), vec!["Coppell Farmers Market"]);
    }

    #[test]
    fn test_query_and_category_combine() {
        let outcome = DirectoryFilter::new(
            "community events",
            CategoryFilter::Only(Category::CommunityPrograms),
        )
        .apply(RESOURCES);
        assert_eq!(
            names(&outcome),
            vec!["Coppell Farmers Market", "Coppell Arts Center"]
        );

        let outcome =
            DirectoryFilter::new("community events", CategoryFilter::Only(Category::Education))
                .apply(RESOURCES);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let outcome = DirectoryFilter::new("zzz-no-match", CategoryFilter::All).apply(RESOURCES);
        assert!(outcome.is_empty());
        assert_eq!(outcome.count(), 0);
    }
}

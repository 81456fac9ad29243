//! Submission form validation.
//!
//! Every field has a rule: a length range (in characters) and, for the
//! website and email fields, a shape check. The first failing check of a
//! field is reported with that field's message.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::error::ValidationError;
use crate::models::{ResourceSubmission, SubmissionField};
use crate::utils::parse_web_url;

/// Shape a field value must have beyond its length bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Text,
    Url,
    Email,
}

/// Constraint attached to a single submission field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub field: SubmissionField,
    pub min: usize,
    pub max: usize,
    pub shape: Shape,
    /// Reported when the value is too short or has the wrong shape.
    pub message: &'static str,
}

const fn text(field: SubmissionField, min: usize, max: usize, message: &'static str) -> FieldRule {
    FieldRule {
        field,
        min,
        max,
        shape: Shape::Text,
        message,
    }
}

/// Rules for every field, in form order.
pub const RULES: [FieldRule; 10] = [
    text(SubmissionField::Name, 2, 100, "Name must be at least 2 characters"),
    text(SubmissionField::Category, 2, 50, "Category is required"),
    text(SubmissionField::Description, 10, 500, "Description must be at least 10 characters"),
    text(SubmissionField::Address, 5, 200, "Address is required"),
    text(SubmissionField::Phone, 10, 20, "Valid phone number is required"),
    FieldRule {
        field: SubmissionField::Website,
        min: 0,
        max: 255,
        shape: Shape::Url,
        message: "Must be a valid URL",
    },
    text(SubmissionField::Hours, 3, 100, "Hours are required"),
    text(SubmissionField::Services, 3, 500, "Please list at least one service"),
    text(SubmissionField::SubmitterName, 2, 100, "Your name is required"),
    FieldRule {
        field: SubmissionField::SubmitterEmail,
        min: 0,
        max: 255,
        shape: Shape::Email,
        message: "Valid email is required",
    },
];

/// Look up the rule for a field.
pub fn rule_for(field: SubmissionField) -> &'static FieldRule {
    // RULES covers every variant, in the same order as SubmissionField::ALL.
    &RULES[field as usize]
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

impl FieldRule {
    /// Check a single value against this rule.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        let fail = |message: String| ValidationError {
            field: self.field,
            message,
        };

        let len = value.chars().count();
        let shape_ok = match self.shape {
            Shape::Text => true,
            Shape::Url => parse_web_url(value).is_ok(),
            Shape::Email => is_email(value),
        };

        if len < self.min || !shape_ok {
            return Err(fail(self.message.to_string()));
        }
        if len > self.max {
            return Err(fail(format!("Must be at most {} characters", self.max)));
        }
        Ok(())
    }
}

/// Validate a single field of a submission.
pub fn validate_field(
    submission: &ResourceSubmission,
    field: SubmissionField,
) -> Result<(), ValidationError> {
    rule_for(field).check(submission.get(field))
}

/// Per-field failures of a whole submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Message for a field, if it failed.
    pub fn get(&self, field: SubmissionField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Replace the recorded outcome for one field, keeping form order.
    pub fn update_field(&mut self, field: SubmissionField, result: Result<(), ValidationError>) {
        self.0.retain(|e| e.field != field);
        if let Err(err) = result {
            let at = self.0.partition_point(|e| (e.field as usize) < (field as usize));
            self.0.insert(at, err);
        }
    }
}

/// Validate every field, collecting all failures.
pub fn validate(submission: &ResourceSubmission) -> Result<(), ValidationErrors> {
    let errors: Vec<_> = RULES
        .iter()
        .filter_map(|rule| rule.check(submission.get(rule.field)).err())
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ResourceSubmission {
        ResourceSubmission {
            name: "Coppell Community Center".to_string(),
            category: "Community Programs".to_string(),
            description: "A place for neighbors to gather and learn.".to_string(),
            address: "123 Main St, Coppell, TX 75019".to_string(),
            phone: "(972) 123-4567".to_string(),
            website: "https://example.com".to_string(),
            hours: "Mon-Fri: 9AM-5PM".to_string(),
            services: "Classes, Events".to_string(),
            submitter_name: "Jamie Doe".to_string(),
            submitter_email: "jamie@example.com".to_string(),
        }
    }

    #[test]
    fn test_rules_line_up_with_fields() {
        for field in SubmissionField::ALL {
            assert_eq!(rule_for(field).field, field);
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert_eq!(validate(&valid_submission()), Ok(()));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate(&ResourceSubmission::default()).unwrap_err();
        assert_eq!(errors.iter().count(), SubmissionField::ALL.len());
        assert_eq!(
            errors.get(SubmissionField::Name),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(errors.get(SubmissionField::Website), Some("Must be a valid URL"));
        assert_eq!(
            errors.get(SubmissionField::SubmitterEmail),
            Some("Valid email is required")
        );
    }

    #[test]
    fn test_too_long() {
        let mut submission = valid_submission();
        submission.phone = "9".repeat(21);
        let errors = validate(&submission).unwrap_err();
        assert_eq!(errors.iter().count(), 1);
        assert_eq!(
            errors.get(SubmissionField::Phone),
            Some("Must be at most 20 characters")
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut submission = valid_submission();
        submission.name = "Éé".to_string();
        assert_eq!(validate_field(&submission, SubmissionField::Name), Ok(()));
    }

    #[test]
    fn test_website_shape() {
        let rule = rule_for(SubmissionField::Website);
        assert!(rule.check("https://coppelltx.gov/parks").is_ok());
        assert!(rule.check("http://localhost:8080").is_ok());
        assert!(rule.check("coppelltx.gov").is_err());
        assert!(rule.check("https://").is_err());
    }

    #[test]
    fn test_update_field() {
        let mut submission = ResourceSubmission::default();
        let mut errors = validate(&submission).unwrap_err();

        submission.name = "Coppell Library".to_string();
        errors.update_field(
            SubmissionField::Name,
            validate_field(&submission, SubmissionField::Name),
        );
        assert_eq!(errors.get(SubmissionField::Name), None);
        assert_eq!(errors.iter().count(), SubmissionField::ALL.len() - 1);

        submission.name = "C".to_string();
        errors.update_field(
            SubmissionField::Name,
            validate_field(&submission, SubmissionField::Name),
        );
        assert_eq!(errors.iter().count(), SubmissionField::ALL.len());
        assert_eq!(errors.iter().next().map(|e| e.field), Some(SubmissionField::Name));
    }

    #[test]
    fn test_email_shape() {
        let rule = rule_for(SubmissionField::SubmitterEmail);
        assert!(rule.check("john@example.com").is_ok());
        assert!(rule.check("first.last+tag@mail.example.org").is_ok());
        assert!(rule.check("john@example").is_err());
        assert!(rule.check(".john@example.com").is_err());
        assert!(rule.check("jo..hn@example.com").is_err());
        assert!(rule.check("john.example.com").is_err());
    }
}

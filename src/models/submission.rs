//! Resource submission form data.

use serde::Serialize;

/// Fields of the submission form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmissionField {
    Name,
    Category,
    Description,
    Address,
    Phone,
    Website,
    Hours,
    Services,
    SubmitterName,
    SubmitterEmail,
}

impl SubmissionField {
    #[cfg(test)]
    pub const ALL: [SubmissionField; 10] = [
        SubmissionField::Name,
        SubmissionField::Category,
        SubmissionField::Description,
        SubmissionField::Address,
        SubmissionField::Phone,
        SubmissionField::Website,
        SubmissionField::Hours,
        SubmissionField::Services,
        SubmissionField::SubmitterName,
        SubmissionField::SubmitterEmail,
    ];

    /// Stable identifier used for `id`/`name` attributes.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Description => "description",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::Hours => "hours",
            Self::Services => "services",
            Self::SubmitterName => "submitterName",
            Self::SubmitterEmail => "submitterEmail",
        }
    }
}

/// A community resource proposed by a visitor.
///
/// Field values are kept exactly as typed; validation happens in
/// [`crate::core::validation`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceSubmission {
    pub name: String,
    pub category: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub hours: String,
    pub services: String,
    pub submitter_name: String,
    pub submitter_email: String,
}

impl ResourceSubmission {
    pub fn get(&self, field: SubmissionField) -> &str {
        match field {
            SubmissionField::Name => &self.name,
            SubmissionField::Category => &self.category,
            SubmissionField::Description => &self.description,
            SubmissionField::Address => &self.address,
            SubmissionField::Phone => &self.phone,
            SubmissionField::Website => &self.website,
            SubmissionField::Hours => &self.hours,
            SubmissionField::Services => &self.services,
            SubmissionField::SubmitterName => &self.submitter_name,
            SubmissionField::SubmitterEmail => &self.submitter_email,
        }
    }

    pub fn set(&mut self, field: SubmissionField, value: String) {
        let slot = match field {
            SubmissionField::Name => &mut self.name,
            SubmissionField::Category => &mut self.category,
            SubmissionField::Description => &mut self.description,
            SubmissionField::Address => &mut self.address,
            SubmissionField::Phone => &mut self.phone,
            SubmissionField::Website => &mut self.website,
            SubmissionField::Hours => &mut self.hours,
            SubmissionField::Services => &mut self.services,
            SubmissionField::SubmitterName => &mut self.submitter_name,
            SubmissionField::SubmitterEmail => &mut self.submitter_email,
        };
        *slot = value;
    }

    /// Services as an ordered tag list (comma-separated, blanks dropped).
    pub fn service_tags(&self) -> Vec<&str> {
        self.services
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// The payload sent for review: text fields trimmed, services as tags.
    pub fn record(&self) -> SubmissionRecord<'_> {
        SubmissionRecord {
            name: self.name.trim(),
            category: self.category.trim(),
            description: self.description.trim(),
            address: self.address.trim(),
            phone: self.phone.trim(),
            website: self.website.trim(),
            hours: self.hours.trim(),
            services: self.service_tags(),
            submitter_name: self.submitter_name.trim(),
            submitter_email: self.submitter_email.trim(),
        }
    }
}

/// Serialized form of a [`ResourceSubmission`].
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub address: &'a str,
    pub phone: &'a str,
    pub website: &'a str,
    pub hours: &'a str,
    pub services: Vec<&'a str>,
    pub submitter_name: &'a str,
    pub submitter_email: &'a str,
}

//! The `JobPosting` value type.

use serde::{Deserialize, Serialize};

/// Sentinel returned when the title anchor is missing.
pub const TITLE_NOT_FOUND: &str = "Title not found";
/// Sentinel returned when the company link is missing.
pub const COMPANY_NOT_FOUND: &str = "Company not found";
/// Sentinel returned when the location link is missing.
pub const LOCATION_NOT_FOUND: &str = "Location not found";
/// Sentinel returned when no deadline rule matches.
pub const DEADLINE_NOT_FOUND: &str = "Deadline not found";
/// Sentinel returned when the description block is missing.
pub const DESCRIPTION_NOT_FOUND: &str = "Description not found";

/// Structured fields of one job-posting page.
///
/// Built once per command by [`crate::extract_posting`], rendered into a
/// chat message, then discarded. Fields hold either extracted text or their
/// "not found" sentinel; none is ever empty after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub deadline: String,
    /// Trimmed posting body, truncated to 200 characters plus `…` when longer.
    pub description: String,
}

impl JobPosting {
    /// Whether the fields required for announcing are present.
    ///
    /// Title, company, location and deadline must be non-empty; the
    /// description is not required.
    pub fn is_announceable(&self) -> bool {
        !self.title.is_empty()
            && !self.company.is_empty()
            && !self.location.is_empty()
            && !self.deadline.is_empty()
    }
}

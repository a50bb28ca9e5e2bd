//! Job-Posting Fetch and Extraction Library
//!
//! Fetches a job-posting page over HTTP and maps its semi-structured markup
//! into a handful of text fields (title, company, location, deadline,
//! description).
//!
//! # Design Philosophy
//!
//! **Partial results beat no results.**
//!
//! - Extraction is a pure, total function: malformed markup never fails it
//! - Every field degrades independently to an explicit "not found" sentinel
//! - Fetching is a trait seam so callers can be tested with a mock
//! - Library handles mechanics, app handles what to do with the fields
//!
//! # Usage
//!
//! ```rust,ignore
//! use jobpost::{extract_posting, HttpFetcher, PageFetcher};
//!
//! let fetcher = HttpFetcher::new();
//! let page = fetcher.fetch("https://example.com/job/123").await?;
//! let posting = extract_posting(&page.html);
//! println!("{} at {}", posting.title, posting.company);
//! ```
//!
//! # Modules
//!
//! - [`fetch`] - `PageFetcher` trait and the HTTP implementation
//! - [`extract`] - Selector-based field extraction
//! - [`posting`] - The `JobPosting` value type and its sentinels
//! - [`error`] - Typed fetch errors

pub mod deadline;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod posting;

// Re-export core types at crate root
pub use error::FetchError;
pub use extract::extract_posting;
pub use fetch::{FetchedPage, HttpFetcher, PageFetcher};
pub use posting::JobPosting;

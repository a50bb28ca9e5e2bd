//! Embed rendering for announced postings.

use jobpost::JobPosting;
use serenity::all::{Colour, CreateEmbed};

/// Body text of the announcement embed: one labelled line per field plus a
/// link back to the source page.
pub fn render_summary(posting: &JobPosting, url: &str) -> String {
    format!(
        "🏢 **Company:** {}\n\
         💼 **Job Title:** {}\n\
         📍 **Location:** {}\n\
         📅 **Deadline:** {}\n\
         📜 **Description:** {}\n\
         🔗 **More Info:** [Click Here]({})",
        posting.company,
        posting.title,
        posting.location,
        posting.deadline,
        posting.description,
        url
    )
}

/// The announcement embed: success marker in the title, green accent.
pub fn job_post_embed(posting: &JobPosting, url: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("✅ Job Post Found!")
        .description(render_summary(posting, url))
        .colour(Colour::DARK_GREEN)
}

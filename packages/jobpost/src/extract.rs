//! Selector-based field extraction for job-posting pages.
//!
//! One parsed document, five independent scans. Extraction never fails:
//! when a field's structural anchor is missing the field falls back to its
//! sentinel and the other fields are unaffected. Only the deadline combines
//! two signals (a warning span that short-circuits, then the second
//! header-info block).

use scraper::{ElementRef, Html, Selector};

use crate::deadline;
use crate::posting::{
    JobPosting, COMPANY_NOT_FOUND, DEADLINE_NOT_FOUND, DESCRIPTION_NOT_FOUND, LOCATION_NOT_FOUND,
    TITLE_NOT_FOUND,
};

/// Deadline forced when the warning span announces the last application day.
pub const APPLICATION_ENDS_TODAY: &str = "Application ends today";

/// Substring of the warning span that triggers the forced deadline.
const LAST_DAY_MARKER: &str = "Last day to apply";

/// Description is cut at this many characters, ellipsis appended.
const DESCRIPTION_LIMIT: usize = 200;

/// Extract the five posting fields from raw page markup.
///
/// Total function: any input, including an empty document, yields a
/// `JobPosting` whose unlocatable fields carry their sentinels.
pub fn extract_posting(html: &str) -> JobPosting {
    let document = Html::parse_document(html);

    JobPosting {
        title: extract_title(&document).unwrap_or_else(|| TITLE_NOT_FOUND.to_string()),
        company: extract_company(&document).unwrap_or_else(|| COMPANY_NOT_FOUND.to_string()),
        location: extract_location(&document).unwrap_or_else(|| LOCATION_NOT_FOUND.to_string()),
        deadline: extract_deadline(&document).unwrap_or_else(|| DEADLINE_NOT_FOUND.to_string()),
        description: extract_description(&document)
            .unwrap_or_else(|| DESCRIPTION_NOT_FOUND.to_string()),
    }
}

/// First heading carrying the posting-title style marker.
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("h1.text--break-word").ok()?;
    document.select(&selector).next().map(element_text)
}

/// Company name: nested span of the first link in the first header-info block.
fn extract_company(document: &Html) -> Option<String> {
    let link = document
        .select(&header_info_selector()?)
        .next()?
        .select(&tag_selector("a")?)
        .next()?;
    let span = link.select(&tag_selector("span")?).next()?;
    Some(element_text(span))
}

/// Location: nested span of the *last* link in the first header-info block,
/// however many links the block carries.
fn extract_location(document: &Html) -> Option<String> {
    let link = document
        .select(&header_info_selector()?)
        .next()?
        .select(&tag_selector("a")?)
        .last()?;
    let span = link.select(&tag_selector("span")?).next()?;
    Some(element_text(span))
}

/// Deadline: the warning span wins outright; otherwise the second span of
/// the second header-info block is run through the keyword cascade.
fn extract_deadline(document: &Html) -> Option<String> {
    if let Ok(warning) = Selector::parse("span.header__info--warning") {
        if let Some(span) = document.select(&warning).next() {
            if element_text(span).contains(LAST_DAY_MARKER) {
                return Some(APPLICATION_ENDS_TODAY.to_string());
            }
        }
    }

    let block = document.select(&header_info_selector()?).nth(1)?;
    let span = block.select(&tag_selector("span")?).nth(1)?;
    deadline::interpret(&element_text(span))
}

/// Posting body, trimmed and truncated.
fn extract_description(document: &Html) -> Option<String> {
    let selector =
        Selector::parse("div.gtm-apply-clicks.description.description--jobentry").ok()?;
    let block = document.select(&selector).next()?;
    Some(truncate_chars(&element_text(block), DESCRIPTION_LIMIT))
}

/// Header-info blocks carry company/location/deadline metadata; several can
/// occur on one page in document order.
fn header_info_selector() -> Option<Selector> {
    Selector::parse("p.header__info").ok()
}

fn tag_selector(tag: &str) -> Option<Selector> {
    Selector::parse(tag).ok()
}

/// Concatenated descendant text, trimmed.
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// First `limit` characters plus a single ellipsis when the text is longer;
/// verbatim otherwise. Counts characters, not bytes.
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut cut: String = text.chars().take(limit).collect();
        cut.push('…');
        cut
    } else {
        text.to_string()
    }
}

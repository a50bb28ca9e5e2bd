//! Deadline text interpretation.
//!
//! The deadline cell of a posting header carries one of several phrasings in
//! English or Finnish. Interpretation is an ordered rule table evaluated in
//! priority order; the first keyword hit wins and no later rule runs.
//! English phrasings are checked before their Finnish counterparts.

/// One interpretation rule: a keyword that must occur in the source text and
/// a transform applied to (text, keyword) when it does.
struct DeadlineRule {
    keyword: &'static str,
    render: fn(&str, &'static str) -> String,
}

/// Rules in priority order. First match wins.
const RULES: &[DeadlineRule] = &[
    DeadlineRule {
        keyword: "Ends",
        render: closing_date,
    },
    DeadlineRule {
        keyword: "Päättyy",
        render: closing_date,
    },
    DeadlineRule {
        keyword: "days remaining",
        render: verbatim,
    },
    DeadlineRule {
        keyword: "päivää jäljellä",
        render: days_left_fi,
    },
    DeadlineRule {
        keyword: "Open until further notice",
        render: keyword_only,
    },
    DeadlineRule {
        keyword: "Published",
        render: publish_date,
    },
];

/// Interpret the deadline cell text.
///
/// Returns `None` when no rule matches, leaving the caller's sentinel in
/// place. The text should already be trimmed.
pub fn interpret(text: &str) -> Option<String> {
    RULES
        .iter()
        .find(|rule| text.contains(rule.keyword))
        .map(|rule| (rule.render)(text, rule.keyword))
}

/// "Ends 31.12.2025" / "Päättyy 31.12.2025" → "Ends " plus whatever follows
/// the keyword. The remainder keeps any leading space present in the source.
fn closing_date(text: &str, keyword: &'static str) -> String {
    format!("Ends {}", after_last(text, keyword))
}

fn verbatim(text: &str, _keyword: &'static str) -> String {
    text.to_string()
}

/// "5 päivää jäljellä": the day count sits before the phrase.
fn days_left_fi(text: &str, keyword: &'static str) -> String {
    format!("{} päivää jäljellä", before_first(text, keyword).trim())
}

fn keyword_only(_text: &str, keyword: &'static str) -> String {
    keyword.to_string()
}

fn publish_date(text: &str, keyword: &'static str) -> String {
    format!("Published {}", after_last(text, keyword).trim())
}

/// Substring after the last occurrence of `keyword`, or "" when absent.
fn after_last<'a>(text: &'a str, keyword: &str) -> &'a str {
    match text.rfind(keyword) {
        Some(idx) => &text[idx + keyword.len()..],
        None => "",
    }
}

/// Substring before the first occurrence of `keyword`, or "" when absent.
fn before_first<'a>(text: &'a str, keyword: &str) -> &'a str {
    match text.find(keyword) {
        Some(idx) => &text[..idx],
        None => "",
    }
}

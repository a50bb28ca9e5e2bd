//! `!job` command parsing.

/// Literal prefix that triggers processing of a message. The trailing space
/// is part of the prefix: `!jobhttp://…` is not a command.
pub const COMMAND_PREFIX: &str = "!job ";

/// Extract the candidate URL from a command message.
///
/// Returns the trimmed remainder after the prefix, or `None` when the
/// message is not a job command. The remainder is not validated here; the
/// handler applies the `http` gate before fetching.
pub fn parse_job_command(content: &str) -> Option<&str> {
    content.strip_prefix(COMMAND_PREFIX).map(str::trim)
}

/// Gate applied before any fetch: the candidate must look like a URL.
pub fn is_http_url(candidate: &str) -> bool {
    candidate.starts_with("http")
}

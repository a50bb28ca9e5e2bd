//! Startup configuration.
//!
//! Two external secrets, both required: the Discord bot token and the id of
//! the channel that receives announcements. They come from the environment
//! (a `.env` file is loaded best-effort in `main`) and are never embedded in
//! source.

use anyhow::{Context, Result};

/// Runtime configuration, read once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Channel that receives job-post announcements
    pub channel_id: u64,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let discord_token =
            std::env::var("DISCORD_TOKEN").context("DISCORD_TOKEN is not set")?;
        let channel_id = std::env::var("DISCORD_CHANNEL_ID")
            .context("DISCORD_CHANNEL_ID is not set")?;
        let channel_id = parse_channel_id(&channel_id)?;

        Ok(Self {
            discord_token,
            channel_id,
        })
    }
}

/// Parse a channel id, tolerating surrounding whitespace.
fn parse_channel_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("DISCORD_CHANNEL_ID is not a valid channel id: {raw:?}"))
}

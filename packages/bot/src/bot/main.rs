// Main entry point for the job announcement bot

use std::sync::Arc;

use anyhow::{Context, Result};
use bot_core::{Config, Handler};
use jobpost::HttpFetcher;
use serenity::all::{Client, GatewayIntents};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the logger so RUST_LOG from the file is honored
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bot_core=debug,jobpost=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting job announcement bot");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Reading message text requires the message-content intent
    let intents = GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(config.channel_id, Arc::new(HttpFetcher::new()));
    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .context("Failed to create Discord client")?;

    // A single process-wide interrupt handler requests gateway shutdown;
    // in-flight work is not drained.
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutting down on interrupt signal");
            shard_manager.shutdown_all().await;
        }
    });

    tracing::info!("Connecting to the Discord gateway");
    client.start().await.context("Discord client error")?;

    Ok(())
}

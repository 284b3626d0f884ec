//! # rosetta-discord
//!
//! Serenity integration: gateway client setup and the event handler that
//! drives translations from commands and flag reactions.

mod embed;
mod handler;

pub use handler::{Handler, REACTION_TEXT_LIMIT};

use rosetta_core::{config::Config, error::RosettaError, traits::Translator};
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;
use tracing::info;

/// Connect to the gateway and run until the connection ends or ctrl-c.
pub async fn run(config: Config, translator: Arc<dyn Translator>) -> Result<(), RosettaError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let token = config.discord_token.clone();
    let handler = Handler::new(config, translator);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| RosettaError::Channel(format!("failed to build Discord client: {e}")))?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            shard_manager.shutdown_all().await;
        }
    });

    client
        .start()
        .await
        .map_err(|e| RosettaError::Channel(format!("gateway connection failed: {e}")))
}

use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::{dispatching::UpdateHandler, prelude::*};

pub mod ai;
pub mod commands;
pub mod concept;
pub mod config;
pub mod db;
pub mod handlers;
pub mod messages;
mod system_info;
mod text_utils;
pub mod utils;


pub use ai::{LanguageModel, LlmConfig, OllamaClient, SamplingParams};
pub use commands::Command;
pub use concept::{
    ConceptService, GenerationOutcome, Normalizer, ParamField, RestaurantConcept,
    RestaurantParams,
};
pub use config::Config;
pub use text_utils::strip_bullet;

// ──────────────────────────────────────────────────────────────
// Update handling
// ──────────────────────────────────────────────────────────────

/// Routes callback queries to the selection panel, commands to
/// [`Command::dispatch`] and any other message to a usage hint.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::callback_handler))
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(commands::handle_command),
                )
                .branch(dptree::endpoint(handlers::reply_with_hint)),
        )
}

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting restaurant concept bot...");

    let config = Config::from_env();
    let bot = Bot::from_env();

    let db_url = db::prepare_sqlite_url(&config.db_url);
    tracing::info!("Connecting to database at: {}", &db_url);
    let db = db::connect_db(&db_url, 5).await?;
    db.migrate().await?;
    tracing::info!("Database connection successful.");

    let client = OllamaClient::new(&config.llm)?;
    match client.health_check().await {
        Ok(()) => tracing::info!(
            model = client.model(),
            url = client.base_url(),
            "Model server reachable"
        ),
        Err(err) => tracing::warn!(
            error = %err,
            url = client.base_url(),
            "Model server unreachable; concepts will use the offline fallback until it is up"
        ),
    }

    let normalizer = Normalizer::new(config.boilerplate_prefixes.clone());
    let service = Arc::new(ConceptService::new(Arc::new(client), normalizer));

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![
            db,
            service,
            config.llm.clone(),
            config.delete_after_timeout
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

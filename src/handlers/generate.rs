use anyhow::Result;
use teloxide::{prelude::*, types::ParseMode};

use super::render::format_concept;
use crate::concept::{ConceptService, ParamField};
use crate::db::Database;
use crate::messages::GENERATING;
use crate::utils::try_delete_message;

/// Run the pipeline for a chat's selections and post the result.
///
/// `cuisine` overrides only the cuisine for this request; stored selections
/// are left as they are.
pub async fn generate_concept(
    bot: &Bot,
    chat_id: ChatId,
    db: &Database,
    service: &ConceptService,
    cuisine: Option<&str>,
) -> Result<()> {
    let mut params = db.load_params(chat_id).await?;
    if let Some(cuisine) = cuisine.map(str::trim).filter(|c| !c.is_empty()) {
        params = params.with(ParamField::Cuisine, cuisine);
    }

    let notice = bot.send_message(chat_id, GENERATING).await?;
    let outcome = service.generate(&params).await;
    try_delete_message(bot, chat_id, notice.id).await;

    if outcome.is_fallback() {
        tracing::info!(chat_id = chat_id.0, "Sending fallback concept");
    }
    let text = format_concept(&outcome, &params);
    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

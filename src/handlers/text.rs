use anyhow::Result;
use teloxide::{prelude::*, types::ParseMode};

use super::render::format_params_summary;
use crate::ai::LlmConfig;
use crate::db::Database;
use crate::messages::{HELP_TEXT, SELECTIONS_RESET, TEXT_HINT};
use crate::system_info::get_system_info;

pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Plain text is not a command; point the user at the panel.
pub async fn reply_with_hint(bot: Bot, msg: Message) -> Result<()> {
    if msg.text().is_none() {
        return Ok(());
    }
    bot.send_message(msg.chat.id, TEXT_HINT).await?;
    Ok(())
}

pub async fn show_params(bot: Bot, msg: Message, db: &Database) -> Result<()> {
    let params = db.load_params(msg.chat.id).await?;
    bot.send_message(msg.chat.id, format_params_summary(&params))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn reset_params(
    bot: Bot,
    msg: Message,
    db: &Database,
    delete_after_timeout: u64,
) -> Result<()> {
    db.clear_selections(msg.chat.id).await?;
    tracing::info!(chat_id = msg.chat.id.0, "Selections reset");
    let confirmation = bot.send_message(msg.chat.id, SELECTIONS_RESET).await?;
    drop(crate::utils::delete_after(
        bot.clone(),
        confirmation.chat.id,
        confirmation.id,
        delete_after_timeout,
    ));
    Ok(())
}

pub async fn show_system_info(bot: Bot, msg: Message, llm: &LlmConfig) -> Result<()> {
    tracing::debug!(chat_id = msg.chat.id.0, "Showing system info");
    bot.send_message(msg.chat.id, get_system_info(&llm.model, &llm.base_url))
        .await?;
    Ok(())
}

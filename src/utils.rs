use std::time::Duration;

use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardMarkup, MessageId, ParseMode},
    RequestError,
};

/// Seconds a transient confirmation stays in the chat.
pub const DEFAULT_DELETE_AFTER_TIMEOUT: u64 = 5;

fn log_failure(action: &'static str, chat_id: ChatId, message_id: MessageId, err: &RequestError) {
    tracing::warn!(
        error = %err,
        action,
        chat_id = chat_id.0,
        message_id = message_id.0,
        "Telegram request failed",
    );
}

/// Remove a transient message once `secs` have passed.
pub fn delete_after(
    bot: Bot,
    chat_id: ChatId,
    message_id: MessageId,
    secs: u64,
) -> tokio::task::JoinHandle<()> {
    tracing::debug!(
        chat_id = chat_id.0,
        message_id = message_id.0,
        delay_secs = secs,
        "Scheduling message deletion"
    );
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(secs)).await;
        try_delete_message(&bot, chat_id, message_id).await;
    })
}

/// Delete a message, logging instead of failing when Telegram refuses.
pub async fn try_delete_message(bot: &Bot, chat_id: ChatId, message_id: MessageId) {
    if let Err(err) = bot.delete_message(chat_id, message_id).await {
        log_failure("delete", chat_id, message_id, &err);
    }
}

/// Redraw a panel message in place with HTML text and a new keyboard.
pub async fn try_edit_html(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: impl Into<String>,
    markup: InlineKeyboardMarkup,
) {
    let request = bot
        .edit_message_text(chat_id, message_id, text)
        .parse_mode(ParseMode::Html)
        .reply_markup(markup);
    if let Err(err) = request.await {
        log_failure("edit", chat_id, message_id, &err);
    }
}

use std::sync::Arc;

use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
};

use super::generate::generate_concept;
use crate::concept::{ConceptService, ParamField, RestaurantParams};
use crate::db::Database;
use crate::messages::{choose_field_text, PANEL_BACK_LABEL, PANEL_GENERATE_LABEL, PANEL_PROMPT};
use crate::utils::try_edit_html;

/// Inline keyboard callbacks used by the selection panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    OpenField(ParamField),
    Set(ParamField, usize),
    Back,
    Generate,
}

impl PanelAction {
    pub fn callback_data(self) -> String {
        match self {
            PanelAction::OpenField(field) => format!("field:{}", field.key()),
            PanelAction::Set(field, idx) => format!("set:{}:{idx}", field.key()),
            PanelAction::Back => "panel".to_string(),
            PanelAction::Generate => "generate".to_string(),
        }
    }

    /// Parse callback data. Choice indexes outside the field's list are rejected.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "panel" => return Some(PanelAction::Back),
            "generate" => return Some(PanelAction::Generate),
            _ => {}
        }
        if let Some(key) = data.strip_prefix("field:") {
            return ParamField::from_key(key).map(PanelAction::OpenField);
        }
        let (key, idx) = data.strip_prefix("set:")?.split_once(':')?;
        let field = ParamField::from_key(key)?;
        let idx: usize = idx.parse().ok()?;
        (idx < field.choices().len()).then_some(PanelAction::Set(field, idx))
    }
}

fn button(label: impl Into<String>, action: PanelAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(label, action.callback_data())
}

/// The overview: one button per parameter showing its current value.
pub fn format_panel(params: &RestaurantParams) -> (String, InlineKeyboardMarkup) {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = ParamField::ALL
        .into_iter()
        .map(|field| {
            vec![button(
                format!("{}: {}", field.label(), params.get(field)),
                PanelAction::OpenField(field),
            )]
        })
        .collect();
    rows.push(vec![button(PANEL_GENERATE_LABEL, PanelAction::Generate)]);
    (PANEL_PROMPT.to_string(), InlineKeyboardMarkup::new(rows))
}

/// The choices for one parameter, two per row, current value marked.
pub fn format_choices(field: ParamField, current: &str) -> (String, InlineKeyboardMarkup) {
    let buttons: Vec<InlineKeyboardButton> = field
        .choices()
        .iter()
        .enumerate()
        .map(|(idx, choice)| {
            let label = if *choice == current {
                format!("✅ {choice}")
            } else {
                choice.to_string()
            };
            button(label, PanelAction::Set(field, idx))
        })
        .collect();

    let mut rows: Vec<Vec<InlineKeyboardButton>> =
        buttons.chunks(2).map(<[InlineKeyboardButton]>::to_vec).collect();
    rows.push(vec![button(PANEL_BACK_LABEL, PanelAction::Back)]);
    (choose_field_text(field.label()), InlineKeyboardMarkup::new(rows))
}

pub async fn show_panel(bot: Bot, msg: Message, db: &Database) -> Result<()> {
    tracing::debug!(chat_id = msg.chat.id.0, "Showing selection panel");
    let params = db.load_params(msg.chat.id).await?;
    let (text, keyboard) = format_panel(&params);
    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await?;
    Ok(())
}

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    db: Database,
    service: Arc<ConceptService>,
) -> Result<()> {
    bot.answer_callback_query(q.id.clone()).await?;

    let (Some(data), Some(msg)) = (q.data, q.message) else {
        return Ok(());
    };
    let Some(action) = PanelAction::parse(&data) else {
        tracing::debug!(data, "Ignoring unknown callback");
        return Ok(());
    };
    let chat_id = msg.chat().id;
    tracing::debug!(chat_id = chat_id.0, ?action, "Panel action");

    match action {
        PanelAction::OpenField(field) => {
            let params = db.load_params(chat_id).await?;
            let (text, keyboard) = format_choices(field, params.get(field));
            try_edit_html(&bot, chat_id, msg.id(), text, keyboard).await;
        }
        PanelAction::Set(field, idx) => {
            db.set_selection(chat_id, field, field.choices()[idx]).await?;
            let params = db.load_params(chat_id).await?;
            let (text, keyboard) = format_panel(&params);
            try_edit_html(&bot, chat_id, msg.id(), text, keyboard).await;
        }
        PanelAction::Back => {
            let params = db.load_params(chat_id).await?;
            let (text, keyboard) = format_panel(&params);
            try_edit_html(&bot, chat_id, msg.id(), text, keyboard).await;
        }
        PanelAction::Generate => {
            generate_concept(&bot, chat_id, &db, &service, None).await?;
        }
    }
    Ok(())
}

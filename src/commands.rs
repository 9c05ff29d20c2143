use std::sync::Arc;

use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::ai::LlmConfig;
use crate::concept::ConceptService;
use crate::db::Database;
use crate::handlers::{
    generate_concept, help, reset_params, show_panel, show_params, show_system_info,
};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "display this text.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "pick cuisine, style, theme and more.")]
    Customize,
    #[command(description = "show the current selections.")]
    Params,
    #[command(description = "generate a restaurant concept (optionally for one cuisine).")]
    Generate(String),
    #[command(description = "clear the current selections.")]
    Reset,
    #[command(description = "show system information.")]
    Info,
}

impl Command {
    pub async fn dispatch(
        self,
        bot: Bot,
        msg: Message,
        db: Database,
        service: Arc<ConceptService>,
        llm: LlmConfig,
        delete_after_timeout: u64,
    ) -> Result<()> {
        tracing::debug!(chat_id = msg.chat.id.0, command = ?self, "Handling command");
        match self {
            Command::Start | Command::Help => help(bot, msg).await?,
            Command::Customize => show_panel(bot, msg, &db).await?,
            Command::Params => show_params(bot, msg, &db).await?,
            Command::Generate(cuisine) => {
                generate_concept(&bot, msg.chat.id, &db, &service, Some(&cuisine)).await?
            }
            Command::Reset => reset_params(bot, msg, &db, delete_after_timeout).await?,
            Command::Info => show_system_info(bot, msg, &llm).await?,
        }
        Ok(())
    }
}

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: Database,
    service: Arc<ConceptService>,
    llm: LlmConfig,
    delete_after_timeout: u64,
) -> Result<()> {
    cmd.dispatch(bot, msg, db, service, llm, delete_after_timeout)
        .await
}

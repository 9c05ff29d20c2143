//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and are
//! easy to update or translate.

pub const HELP_TEXT: &str =
    "🍽️ <b>Restaurant Name Generator</b>\n\
     Generate unique restaurant names and menus tailored to your vision!\n\n\
     <b>Commands:</b>\n\
     /customize - Pick cuisine, style, theme and more.\n\
     /params - Show your current selections.\n\
     /generate - Generate a restaurant concept from your selections.\n\
     /generate &lt;cuisine&gt; - Quick concept for one cuisine, other options at defaults.\n\
     /reset - Clear your selections.\n\
     /info - Show system information.\n\n\
     Mix different options to create unique concepts, and try several times for different results.";

pub const TEXT_HINT: &str = "Use /customize to pick your restaurant options, then /generate.";

pub const PANEL_PROMPT: &str = "🎨 Customize your restaurant. Tap an option to change it.";
pub const PANEL_GENERATE_LABEL: &str = "🚀 Generate Restaurant Concept";
pub const PANEL_BACK_LABEL: &str = "⬅️ Back";

pub fn choose_field_text(label: &str) -> String {
    format!("Pick a {}:", label.to_lowercase())
}

pub const SELECTIONS_RESET: &str = "Your selections were reset to the defaults.";
pub const GENERATING: &str = "🎭 Crafting your unique restaurant concept...";
pub const CONCEPT_READY: &str = "✨ Your restaurant concept is ready!";
pub const MENU_HEADER: &str = "📋 <b>Menu Highlights</b>";
pub const SUMMARY_HEADER: &str = "📊 <b>Concept Summary</b>";
pub const FALLBACK_NOTICE: &str =
    "💡 The language model could not be reached, so this is an offline suggestion. \
     Please try again or check the connection to the model.";

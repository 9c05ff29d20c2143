pub mod generate;
pub mod panel;
pub mod render;
pub mod text;

pub use generate::generate_concept;
pub use panel::{callback_handler, format_choices, format_panel, show_panel, PanelAction};
pub use render::{format_concept, format_menu_columns, format_params_summary, MAX_MENU_ITEMS};
pub use text::{help, reply_with_hint, reset_params, show_params, show_system_info};

use teloxide::utils::html;

use crate::concept::{GenerationOutcome, ParamField, RestaurantParams};
use crate::messages::{CONCEPT_READY, FALLBACK_NOTICE, MENU_HEADER, SUMMARY_HEADER};
use crate::text_utils::{display_len, pad_end, strip_bullet, truncate_graphemes};

/// At most this many menu items are shown.
pub const MAX_MENU_ITEMS: usize = 10;

/// Longest name, description, menu item and parameter value shown, in graphemes.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MAX_MENU_ITEM_LEN: usize = 60;
pub const MAX_PARAM_LEN: usize = 50;

const COLUMN_GAP: &str = "   ";

/// Lay menu items out in two columns inside a `<pre>` block.
///
/// Items alternate between the left and right column, bullet markers are
/// stripped, and blank entries are skipped. Returns `None` when nothing is
/// left to show.
pub fn format_menu_columns(items: &[String]) -> Option<String> {
    let cleaned: Vec<_> = items
        .iter()
        .map(|item| strip_bullet(item))
        .filter(|item| !item.is_empty())
        .take(MAX_MENU_ITEMS)
        .map(|item| truncate_graphemes(item, MAX_MENU_ITEM_LEN))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let width = cleaned
        .iter()
        .step_by(2)
        .map(|item| display_len(item))
        .max()
        .unwrap_or(0);

    let rows: Vec<String> = cleaned
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => format!(
                "{}{COLUMN_GAP}{}",
                html::escape(&pad_end(left, width)),
                html::escape(right)
            ),
            [left] => html::escape(left),
            _ => String::new(),
        })
        .collect();

    Some(format!("<pre>{}</pre>", rows.join("\n")))
}

/// Echo of the request parameters.
pub fn format_params_summary(params: &RestaurantParams) -> String {
    let entry = |field: ParamField| {
        format!(
            "{} {}",
            html::bold(&format!("{}:", field.label())),
            html::escape(&truncate_graphemes(params.get(field), MAX_PARAM_LEN))
        )
    };
    let line = |fields: &[ParamField]| {
        fields
            .iter()
            .map(|f| entry(*f))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    [
        line(&[ParamField::Cuisine, ParamField::Style, ParamField::Theme]),
        line(&[ParamField::Location, ParamField::Specialty, ParamField::Price]),
        line(&[ParamField::Feature]),
    ]
    .join("\n")
}

/// Full HTML message for a generated concept.
pub fn format_concept(outcome: &GenerationOutcome, params: &RestaurantParams) -> String {
    let concept = outcome.concept();
    let mut sections = vec![
        CONCEPT_READY.to_string(),
        format!(
            "🏪 {}",
            html::bold(&html::escape(&truncate_graphemes(
                concept.primary_name().trim(),
                MAX_NAME_LEN
            )))
        ),
    ];

    let description = concept.description.trim();
    if !description.is_empty() {
        sections.push(html::italic(&html::escape(&truncate_graphemes(
            description,
            MAX_DESCRIPTION_LEN,
        ))));
    }

    let menu = format_menu_columns(&concept.menu_items)
        .unwrap_or_else(|| html::escape(crate::concept::normalize::NO_MENU_ITEMS));
    sections.push(format!("{MENU_HEADER}\n{menu}"));
    sections.push(format!("{SUMMARY_HEADER}\n{}", format_params_summary(params)));

    if outcome.is_fallback() {
        sections.push(FALLBACK_NOTICE.to_string());
    }

    sections.join("\n\n")
}

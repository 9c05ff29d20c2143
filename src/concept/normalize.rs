use anyhow::{anyhow, Result};
use tracing::{trace, warn};

use super::model::{RestaurantConcept, StageOutputs, DESCRIPTION_KEY, MENU_KEY, NAME_KEY};

pub const UNNAMED_RESTAURANT: &str = "Unnamed Restaurant";
pub const NO_MENU_ITEMS: &str = "No menu items available";
pub const PROCESSING_ERROR_NAME: &str = "Processing Error";
pub const PROCESSING_ERROR_DESCRIPTION: &str = "Unable to process restaurant description";
pub const PROCESSING_ERROR_MENU: &str = "Unable to process menu items";

pub const DEFAULT_BOILERPLATE_PREFIXES: [&str; 3] = ["Menu", "Items:", "---"];

/// Turns raw stage text into a [`RestaurantConcept`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    boilerplate_prefixes: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_BOILERPLATE_PREFIXES)
    }
}

impl Normalizer {
    /// Menu lines starting with any of `prefixes` are dropped. Empty prefixes are ignored.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            boilerplate_prefixes: prefixes
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    pub fn boilerplate_prefixes(&self) -> &[String] {
        &self.boilerplate_prefixes
    }

    /// Normalize stage text. Never fails; malformed input gives a degraded concept.
    pub fn normalize(&self, outputs: &StageOutputs) -> RestaurantConcept {
        match self.try_normalize(outputs) {
            Ok(concept) => concept,
            Err(err) => {
                warn!(error = %err, "Normalizing stage output failed");
                degraded_concept()
            }
        }
    }

    fn try_normalize(&self, outputs: &StageOutputs) -> Result<RestaurantConcept> {
        let name = required(outputs, NAME_KEY)?;
        let description = required(outputs, DESCRIPTION_KEY)?;
        let menu = required(outputs, MENU_KEY)?;

        let mut names: Vec<String> = non_empty_lines(name).collect();
        if names.is_empty() {
            names.push(UNNAMED_RESTAURANT.to_string());
        }

        let mut menu_items: Vec<String> = non_empty_lines(menu)
            .filter(|line| !self.is_boilerplate(line))
            .collect();
        if menu_items.is_empty() {
            menu_items.push(NO_MENU_ITEMS.to_string());
        }

        trace!(
            names = names.len(),
            menu_items = menu_items.len(),
            "Normalized concept"
        );
        Ok(RestaurantConcept {
            names,
            description: description.trim().to_string(),
            menu_items,
        })
    }

    fn is_boilerplate(&self, line: &str) -> bool {
        self.boilerplate_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }
}

/// The concept returned when stage output cannot be processed.
pub fn degraded_concept() -> RestaurantConcept {
    RestaurantConcept {
        names: vec![PROCESSING_ERROR_NAME.to_string()],
        description: PROCESSING_ERROR_DESCRIPTION.to_string(),
        menu_items: vec![PROCESSING_ERROR_MENU.to_string()],
    }
}

fn required<'a>(outputs: &'a StageOutputs, key: &str) -> Result<&'a str> {
    outputs
        .get(key)
        .ok_or_else(|| anyhow!("stage output `{key}` is missing"))
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

use std::collections::BTreeMap;

pub const NAME_KEY: &str = "restaurant_name";
pub const DESCRIPTION_KEY: &str = "description";
pub const MENU_KEY: &str = "menu_items";

/// Raw completion text per stage, keyed by the stage's output name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageOutputs(BTreeMap<String, String>);

impl StageOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.0.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StageOutputs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The finished concept handed to the bot for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantConcept {
    pub names: Vec<String>,
    pub description: String,
    pub menu_items: Vec<String>,
}

impl RestaurantConcept {
    /// The headline name. Never empty for concepts built by this crate.
    pub fn primary_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}

/// Re-express a concept as stage text, one entry per line.
impl From<&RestaurantConcept> for StageOutputs {
    fn from(concept: &RestaurantConcept) -> Self {
        [
            (NAME_KEY, concept.names.join("\n")),
            (DESCRIPTION_KEY, concept.description.clone()),
            (MENU_KEY, concept.menu_items.join("\n")),
        ]
        .into_iter()
        .collect()
    }
}

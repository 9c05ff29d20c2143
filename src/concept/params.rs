/// One of the seven restaurant parameters a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamField {
    Cuisine,
    Style,
    Theme,
    Location,
    Specialty,
    Price,
    Feature,
}

impl ParamField {
    pub const ALL: [ParamField; 7] = [
        ParamField::Cuisine,
        ParamField::Style,
        ParamField::Theme,
        ParamField::Location,
        ParamField::Specialty,
        ParamField::Price,
        ParamField::Feature,
    ];

    /// Template variable name and storage key.
    pub fn key(self) -> &'static str {
        match self {
            ParamField::Cuisine => "cuisine",
            ParamField::Style => "style",
            ParamField::Theme => "theme",
            ParamField::Location => "location",
            ParamField::Specialty => "specialty",
            ParamField::Price => "price",
            ParamField::Feature => "feature",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParamField::Cuisine => "Cuisine",
            ParamField::Style => "Style",
            ParamField::Theme => "Theme",
            ParamField::Location => "Location",
            ParamField::Specialty => "Specialty",
            ParamField::Price => "Price Range",
            ParamField::Feature => "Special Feature",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            ParamField::Cuisine => "Italian",
            ParamField::Style => "Casual",
            ParamField::Theme => "Modern",
            ParamField::Location => "Downtown",
            ParamField::Specialty => "Traditional",
            ParamField::Price => "Mid-range",
            ParamField::Feature => "Dine-in",
        }
    }

    /// Values offered by the selection panel.
    pub fn choices(self) -> &'static [&'static str] {
        match self {
            ParamField::Cuisine => &[
                "Italian", "Chinese", "Mexican", "Indian", "American", "French", "Japanese",
                "Thai",
            ],
            ParamField::Style => &[
                "Casual",
                "Fine Dining",
                "Fast Food",
                "Cafe",
                "Buffet",
                "Food Truck",
            ],
            ParamField::Theme => &[
                "Family-friendly",
                "Romantic",
                "Trendy",
                "Rustic",
                "Modern",
                "Vintage",
            ],
            ParamField::Location => &[
                "Downtown",
                "Suburb",
                "Rural",
                "Coastal",
                "Urban",
                "Shopping Mall",
            ],
            ParamField::Specialty => &[
                "Vegetarian",
                "Vegan",
                "Gluten-free",
                "Seafood",
                "Barbecue",
                "Fusion",
                "Traditional",
            ],
            ParamField::Price => &["Budget", "Mid-range", "Premium", "Luxury"],
            ParamField::Feature => &[
                "Live Music",
                "Outdoor Seating",
                "Pet-friendly",
                "Takeout Only",
                "Delivery",
                "24/7",
            ],
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Parameters for one generation request.
///
/// Every field is always populated: anything not supplied falls back to
/// [`ParamField::default_value`]. Values are read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantParams {
    cuisine: String,
    style: String,
    theme: String,
    location: String,
    specialty: String,
    price: String,
    feature: String,
}

impl Default for RestaurantParams {
    fn default() -> Self {
        Self {
            cuisine: ParamField::Cuisine.default_value().to_string(),
            style: ParamField::Style.default_value().to_string(),
            theme: ParamField::Theme.default_value().to_string(),
            location: ParamField::Location.default_value().to_string(),
            specialty: ParamField::Specialty.default_value().to_string(),
            price: ParamField::Price.default_value().to_string(),
            feature: ParamField::Feature.default_value().to_string(),
        }
    }
}

impl RestaurantParams {
    /// Build params from a string-keyed mapping. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .filter_map(|(k, v)| ParamField::from_key(k.as_ref()).map(|f| (f, v.into())))
            .collect()
    }

    /// Return a copy with one field replaced.
    pub fn with(mut self, field: ParamField, value: impl Into<String>) -> Self {
        *self.slot(field) = value.into();
        self
    }

    pub fn get(&self, field: ParamField) -> &str {
        match field {
            ParamField::Cuisine => &self.cuisine,
            ParamField::Style => &self.style,
            ParamField::Theme => &self.theme,
            ParamField::Location => &self.location,
            ParamField::Specialty => &self.specialty,
            ParamField::Price => &self.price,
            ParamField::Feature => &self.feature,
        }
    }

    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// All fields as `(key, value)` pairs in declaration order.
    pub fn vars(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        ParamField::ALL.into_iter().map(|f| (f.key(), self.get(f)))
    }

    fn slot(&mut self, field: ParamField) -> &mut String {
        match field {
            ParamField::Cuisine => &mut self.cuisine,
            ParamField::Style => &mut self.style,
            ParamField::Theme => &mut self.theme,
            ParamField::Location => &mut self.location,
            ParamField::Specialty => &mut self.specialty,
            ParamField::Price => &mut self.price,
            ParamField::Feature => &mut self.feature,
        }
    }
}

impl FromIterator<(ParamField, String)> for RestaurantParams {
    fn from_iter<T: IntoIterator<Item = (ParamField, String)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::default(), |params, (field, value)| params.with(field, value))
    }
}

use super::model::RestaurantConcept;
use super::params::RestaurantParams;

struct CuisineEntry {
    cuisine: &'static str,
    names: [&'static str; 3],
    menu: [&'static str; 4],
}

const FALLBACK_TABLE: [CuisineEntry; 6] = [
    CuisineEntry {
        cuisine: "Italian",
        names: ["Bella Vista", "La Famiglia", "Nonna's Kitchen"],
        menu: [
            "Margherita Pizza",
            "Fettuccine Alfredo",
            "Chicken Parmigiana",
            "Tiramisu",
        ],
    },
    CuisineEntry {
        cuisine: "Chinese",
        names: ["Golden Dragon", "Jade Garden", "Lucky Bamboo"],
        menu: [
            "Sweet & Sour Pork",
            "Kung Pao Chicken",
            "Fried Rice",
            "Spring Rolls",
        ],
    },
    CuisineEntry {
        cuisine: "Mexican",
        names: ["Casa Fiesta", "El Corazón", "Aztec Grill"],
        menu: [
            "Tacos al Pastor",
            "Chicken Quesadilla",
            "Beef Burrito",
            "Churros",
        ],
    },
    CuisineEntry {
        cuisine: "Indian",
        names: ["Spice Route", "Maharaja Palace", "Curry Corner"],
        menu: ["Butter Chicken", "Biryani", "Naan Bread", "Gulab Jamun"],
    },
    CuisineEntry {
        cuisine: "American",
        names: ["Liberty Grill", "Stars & Stripes", "All-American Diner"],
        menu: ["Classic Burger", "BBQ Ribs", "Mac and Cheese", "Apple Pie"],
    },
    CuisineEntry {
        cuisine: "French",
        names: ["Le Petit Bistro", "Café Paris", "Bonne Appetite"],
        menu: [
            "Coq au Vin",
            "French Onion Soup",
            "Ratatouille",
            "Crème Brûlée",
        ],
    },
];

const GENERIC_NAME: &str = "The Local Eatery";
const GENERIC_MENU: [&str; 3] = ["House Special", "Chef's Choice", "Daily Special"];

/// Build a concept from the static table without touching the model.
///
/// Lookup is by exact cuisine name; anything else gets the generic entry.
pub fn fallback_concept(params: &RestaurantParams) -> RestaurantConcept {
    let cuisine = params.cuisine();
    let style = params.style();

    let (name, menu): (&str, Vec<String>) =
        match FALLBACK_TABLE.iter().find(|e| e.cuisine == cuisine) {
            Some(entry) => (entry.names[0], entry.menu.map(String::from).to_vec()),
            None => (GENERIC_NAME, GENERIC_MENU.map(String::from).to_vec()),
        };

    RestaurantConcept {
        names: vec![format!("{name} ({style})")],
        description: format!(
            "A charming {} {} restaurant serving authentic flavors in a welcoming atmosphere.",
            style.to_lowercase(),
            cuisine.to_lowercase()
        ),
        menu_items: menu,
    }
}

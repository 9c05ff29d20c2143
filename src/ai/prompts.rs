//! Prompt templates for the three generation stages.
//!
//! Kept together so the wording of name, description and menu prompts can be
//! tuned in one place.

use super::template::PromptTemplate;

pub const NAME_PROMPT: PromptTemplate = PromptTemplate::new(
    &["cuisine", "style", "theme", "location", "specialty", "price"],
    "Create a creative and memorable restaurant name for a {style} {cuisine} restaurant.

Restaurant Details:
- Cuisine: {cuisine}
- Style: {style}
- Theme: {theme}
- Location: {location}
- Specialty: {specialty}
- Price Range: {price}

The name should be:
- Catchy and memorable
- Appropriate for the cuisine and style
- Suitable for {theme} theme
- Professional yet creative

Provide only the restaurant name, nothing else.",
);

pub const DESCRIPTION_PROMPT: PromptTemplate = PromptTemplate::new(
    &["restaurant_name", "cuisine", "style", "theme", "specialty"],
    "Create a brief, appealing description for {restaurant_name}, a {style} {cuisine} restaurant.

Restaurant Details:
- Name: {restaurant_name}
- Cuisine: {cuisine}
- Style: {style}
- Theme: {theme}
- Specialty: {specialty}

Write a 2-3 sentence description that captures the restaurant's essence and would attract customers. Focus on the atmosphere, cuisine quality, and unique selling points.",
);

pub const MENU_PROMPT: PromptTemplate = PromptTemplate::new(
    &["restaurant_name", "cuisine", "style", "specialty", "price"],
    "Create an appealing menu for {restaurant_name}, a {style} {cuisine} restaurant.

Restaurant Details:
- Name: {restaurant_name}
- Cuisine: {cuisine}
- Style: {style}
- Specialty: {specialty}
- Price Range: {price}

Generate 8-12 menu items that:
- Reflect the {cuisine} cuisine authentically
- Match the {style} style and {price} price range
- Include {specialty} options where appropriate
- Are creative but recognizable
- Include a mix of appetizers, main courses, and desserts

Format: List each item on a new line with just the dish name (no prices or descriptions).
Example format:
Truffle Mushroom Risotto
Grilled Salmon with Herbs
Chocolate Lava Cake",
);

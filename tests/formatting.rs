use menubot::handlers::{format_choices, format_concept, format_panel, PanelAction};
use menubot::messages::FALLBACK_NOTICE;
use menubot::{GenerationOutcome, ParamField, RestaurantConcept, RestaurantParams};

fn generated(names: &[&str], description: &str, menu: &[&str]) -> GenerationOutcome {
    GenerationOutcome::Generated(RestaurantConcept {
        names: names.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        menu_items: menu.iter().map(|s| s.to_string()).collect(),
    })
}

#[test]
fn concept_shows_first_name_description_and_menu() {
    let params = RestaurantParams::default().with(ParamField::Cuisine, "Thai");
    let outcome = generated(
        &["Lotus & Lime", "Second Choice"],
        "Street food <done> right.",
        &["- Pad Thai", "- Green Curry", "- Mango Sticky Rice"],
    );

    let text = format_concept(&outcome, &params);

    assert!(text.contains("<b>Lotus &amp; Lime</b>"));
    assert!(!text.contains("Second Choice"));
    assert!(text.contains("<i>Street food &lt;done&gt; right.</i>"));
    assert!(text.contains(&format!(
        "<pre>Pad Thai{}Green Curry\nMango Sticky Rice</pre>",
        " ".repeat(12)
    )));
    assert!(text.contains("<b>Cuisine:</b> Thai"));
    assert!(!text.contains(FALLBACK_NOTICE));
}

#[test]
fn concept_without_menu_items_says_so() {
    let outcome = generated(&["Luna"], "Quiet.", &[]);
    let text = format_concept(&outcome, &RestaurantParams::default());
    assert!(text.contains("No menu items available"));
}

#[test]
fn fallback_outcome_is_flagged() {
    let params = RestaurantParams::default();
    let outcome = GenerationOutcome::Fallback {
        concept: menubot::concept::fallback_concept(&params),
        reason: "connection refused".into(),
    };
    let text = format_concept(&outcome, &params);
    assert!(text.contains("Bella Vista (Casual)"));
    assert!(text.contains(FALLBACK_NOTICE));
    assert!(!text.contains("connection refused"));
}

#[test]
fn panel_buttons_follow_selections() {
    let params = RestaurantParams::default()
        .with(ParamField::Style, "Food Truck")
        .with(ParamField::Price, "Luxury");
    let (_, keyboard) = format_panel(&params);

    let labels: Vec<&str> = keyboard
        .inline_keyboard
        .iter()
        .map(|row| row[0].text.as_str())
        .collect();
    assert_eq!(labels[1], "Style: Food Truck");
    assert_eq!(labels[6], "Price Range: Luxury");
    assert_eq!(labels.len(), 8);
}

#[test]
fn every_choice_button_parses_back_to_its_field() {
    for field in ParamField::ALL {
        let (_, keyboard) = format_choices(field, field.default_value());
        let marked = keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .filter(|b| b.text.starts_with('✅'))
            .count();
        let offered = field.choices().contains(&field.default_value());
        assert_eq!(marked, usize::from(offered), "{field:?}");

        for (idx, _) in field.choices().iter().enumerate() {
            let data = PanelAction::Set(field, idx).callback_data();
            assert_eq!(PanelAction::parse(&data), Some(PanelAction::Set(field, idx)));
        }
    }
}

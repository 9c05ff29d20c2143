use menubot::concept::{StageOutputs, DESCRIPTION_KEY, MENU_KEY, NAME_KEY};
use menubot::Normalizer;

fn menu_only(menu: &str) -> StageOutputs {
    [(NAME_KEY, "Casa"), (DESCRIPTION_KEY, "Nice."), (MENU_KEY, menu)]
        .into_iter()
        .collect()
}

#[test]
fn menu_header_with_five_dishes_gives_five_entries() {
    let raw = "Menu Items:\nAntipasto Misto\nCacio e Pepe\nSaltimbocca\nRisotto ai Funghi\nCannoli";
    let concept = Normalizer::default().normalize(&menu_only(raw));
    assert_eq!(
        concept.menu_items,
        vec![
            "Antipasto Misto",
            "Cacio e Pepe",
            "Saltimbocca",
            "Risotto ai Funghi",
            "Cannoli"
        ]
    );
}

#[test]
fn separator_and_blank_lines_are_removed() {
    let concept = Normalizer::default().normalize(&menu_only("\n\nTaco\n---\nBurrito\n"));
    assert_eq!(concept.menu_items, vec!["Taco", "Burrito"]);
}

#[test]
fn items_prefix_line_is_removed() {
    let concept = Normalizer::default().normalize(&menu_only("Items:\n  Pho  \n\r\nBanh Mi\r\n"));
    assert_eq!(concept.menu_items, vec!["Pho", "Banh Mi"]);
}

#[test]
fn prefix_match_is_case_sensitive_and_anchored() {
    let concept = Normalizer::default().normalize(&menu_only("menu of the day\nDaily Menu"));
    assert_eq!(concept.menu_items, vec!["menu of the day", "Daily Menu"]);
}

use std::fmt::Write;

use crate::catalog::{HealthCondition, IngredientCategory, SpiceLevel};
use crate::session::DishSession;

const TITLE: &str = "🍲 Customize Your Dish";
const SUBTITLE: &str = "Your personalized healthy meal, just for you!";

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn render_fieldset(out: &mut String, session: &DishSession, legend: &str, category: IngredientCategory) {
    let _ = writeln!(out, "{}", legend);
    for item in category.catalog() {
        let checked = session.selection().is_selected(category, item);
        let _ = writeln!(out, "  {} {}", checkbox(checked), item);
    }
}

fn render_select<T: PartialEq + std::fmt::Display>(out: &mut String, label: &str, options: &[T], current: &T) {
    let rendered: Vec<String> = options
        .iter()
        .map(|option| {
            if option == current {
                format!("({})", option)
            } else {
                option.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}: {}", label, rendered.join(" | "));
}

/// Renders the whole configurator as plain text: header, checkboxes,
/// selects, buttons and, once something was generated, the output block.
pub fn render_panel(session: &DishSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", SUBTITLE);
    out.push('\n');

    render_fieldset(&mut out, session, "Select Vegetables:", IngredientCategory::Vegetable);
    render_fieldset(&mut out, session, "Select Non-Veg Items:", IngredientCategory::Protein);
    out.push('\n');

    let selection = session.selection();
    render_select(&mut out, "Select Your Health condition", &HealthCondition::ALL, &selection.health());
    render_select(&mut out, "Spice level", &SpiceLevel::ALL, &selection.spice());
    out.push('\n');

    let order_button = if session.can_order() {
        "[ Order ]"
    } else {
        "[ Order ] (disabled)"
    };
    let _ = writeln!(out, "[ Generate Dish ]  {}", order_button);

    if let Some(text) = session.displayed_text() {
        out.push('\n');
        out.push_str(&text);
        out.push('\n');
    }
    out
}

/// Lists the catalog entries accepted by the `veg`, `protein`, `health`
/// and `spice` commands.
pub fn render_catalog() -> String {
    let health: Vec<&str> = HealthCondition::ALL.iter().map(|h| h.as_str()).collect();
    let spice: Vec<&str> = SpiceLevel::ALL.iter().map(|s| s.as_str()).collect();
    format!(
        "Vegetables: {}\nNon-Veg Items: {}\nHealth conditions: {}\nSpice levels: {}",
        IngredientCategory::Vegetable.catalog().join(", "),
        IngredientCategory::Protein.catalog().join(", "),
        health.join(", "),
        spice.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_marks_selection_and_disables_order() {
        let mut session = DishSession::new();
        session.toggle_ingredient(IngredientCategory::Vegetable, "Leek");
        session.set_spice("Spicy").unwrap();

        let panel = render_panel(&session);
        assert!(panel.starts_with("🍲 Customize Your Dish\n"));
        assert!(panel.contains("  [x] Leek\n"));
        assert!(panel.contains("  [ ] Corn\n"));
        assert!(panel.contains("Spice level: Mild | Medium | (Spicy)\n"));
        assert!(panel.contains("Select Your Health condition: (Thyroid) | Diabetes | Heart | Chronic\n"));
        assert!(panel.contains("[ Order ] (disabled)"));
        assert!(!panel.contains("Recipe:"));
    }

    #[test]
    fn test_panel_shows_output_after_generate() {
        let mut session = DishSession::new();
        session.toggle_ingredient(IngredientCategory::Protein, "Eggs");
        session.generate();
        session.place_order();

        let panel = render_panel(&session);
        assert!(panel.contains("[ Generate Dish ]  [ Order ]\n"));
        assert!(panel.contains("1. Wash & chop Eggs."));
        assert!(panel.ends_with("✅ Your order is placed!\n"));
    }

    #[test]
    fn test_catalog_listing() {
        let catalog = render_catalog();
        assert!(catalog.contains("Vegetables: Bell Pepper, Ginger, Mushroom"));
        assert!(catalog.contains("Non-Veg Items: Mutton, Chicken, Fish, Prawns, Eggs"));
        assert!(catalog.ends_with("Spice levels: Mild, Medium, Spicy"));
    }
}

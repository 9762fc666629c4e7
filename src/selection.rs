use serde::Serialize;
use tracing::debug;

use crate::catalog::{HealthCondition, IngredientCategory, SpiceLevel};
use crate::error::ConfiguratorResult;

/// The user's current choices. Ingredient lists keep the order in which
/// items were selected and never hold duplicates.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_vegetables: Vec<String>,
    selected_proteins: Vec<String>,
    health: HealthCondition,
    spice: SpiceLevel,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` to the category's set, or removes it if already selected.
    pub fn toggle_ingredient(&mut self, category: IngredientCategory, id: &str) {
        let set = self.set_mut(category);
        if let Some(pos) = set.iter().position(|item| item == id) {
            set.remove(pos);
            debug!(%category, id, "ingredient deselected");
        } else {
            set.push(id.to_string());
            debug!(%category, id, "ingredient selected");
        }
    }

    /// Adds `id` unless it is already selected. Returns whether it was added.
    pub fn select_ingredient(&mut self, category: IngredientCategory, id: &str) -> bool {
        if self.is_selected(category, id) {
            return false;
        }
        self.toggle_ingredient(category, id);
        true
    }

    pub fn set_health(&mut self, value: &str) -> ConfiguratorResult<()> {
        let health = value.parse::<HealthCondition>()?;
        self.set_health_condition(health);
        Ok(())
    }

    pub fn set_spice(&mut self, value: &str) -> ConfiguratorResult<()> {
        let spice = value.parse::<SpiceLevel>()?;
        self.set_spice_level(spice);
        Ok(())
    }

    pub fn set_health_condition(&mut self, health: HealthCondition) {
        debug!(%health, "health condition set");
        self.health = health;
    }

    pub fn set_spice_level(&mut self, spice: SpiceLevel) {
        debug!(%spice, "spice level set");
        self.spice = spice;
    }

    pub fn selected_vegetables(&self) -> &[String] {
        &self.selected_vegetables
    }

    pub fn selected_proteins(&self) -> &[String] {
        &self.selected_proteins
    }

    pub fn health(&self) -> HealthCondition {
        self.health
    }

    pub fn spice(&self) -> SpiceLevel {
        self.spice
    }

    pub fn is_selected(&self, category: IngredientCategory, id: &str) -> bool {
        self.set(category).iter().any(|item| item == id)
    }

    /// Vegetables first, then proteins, each in selection order.
    pub fn all_ingredients(&self) -> Vec<String> {
        self.selected_vegetables
            .iter()
            .chain(self.selected_proteins.iter())
            .cloned()
            .collect()
    }

    fn set(&self, category: IngredientCategory) -> &Vec<String> {
        match category {
            IngredientCategory::Vegetable => &self.selected_vegetables,
            IngredientCategory::Protein => &self.selected_proteins,
        }
    }

    fn set_mut(&mut self, category: IngredientCategory) -> &mut Vec<String> {
        match category {
            IngredientCategory::Vegetable => &mut self.selected_vegetables,
            IngredientCategory::Protein => &mut self.selected_proteins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfiguratorError;

    #[test]
    fn test_new_state_is_empty_with_defaults() {
        let state = SelectionState::new();
        assert!(state.selected_vegetables().is_empty());
        assert!(state.selected_proteins().is_empty());
        assert_eq!(state.health(), HealthCondition::Thyroid);
        assert_eq!(state.spice(), SpiceLevel::Mild);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = SelectionState::new();
        state.toggle_ingredient(IngredientCategory::Vegetable, "Okra");
        assert!(state.is_selected(IngredientCategory::Vegetable, "Okra"));
        assert!(!state.is_selected(IngredientCategory::Protein, "Okra"));

        state.toggle_ingredient(IngredientCategory::Vegetable, "Okra");
        assert_eq!(state, SelectionState::new());
    }

    #[test]
    fn test_toggle_preserves_selection_order() {
        let mut state = SelectionState::new();
        state.toggle_ingredient(IngredientCategory::Protein, "Fish");
        state.toggle_ingredient(IngredientCategory::Vegetable, "Corn");
        state.toggle_ingredient(IngredientCategory::Vegetable, "Ginger");
        state.toggle_ingredient(IngredientCategory::Protein, "Eggs");
        // Removing and re-adding moves an item to the end.
        state.toggle_ingredient(IngredientCategory::Vegetable, "Corn");
        state.toggle_ingredient(IngredientCategory::Vegetable, "Corn");

        assert_eq!(state.all_ingredients(), vec!["Ginger", "Corn", "Fish", "Eggs"]);
    }

    #[test]
    fn test_select_never_deselects() {
        let mut state = SelectionState::new();
        assert!(state.select_ingredient(IngredientCategory::Vegetable, "Ginger"));
        assert!(!state.select_ingredient(IngredientCategory::Vegetable, "Ginger"));
        assert_eq!(state.selected_vegetables(), ["Ginger".to_string()]);
    }

    #[test]
    fn test_invalid_enum_value_leaves_state_untouched() {
        let mut state = SelectionState::new();
        state.set_spice("Medium").unwrap();

        let before = state.clone();
        let err = state.set_spice("Extra Hot").unwrap_err();
        assert!(matches!(err, ConfiguratorError::InvalidEnumValue { kind: "spice level", .. }));
        assert!(state.set_health("Liver").is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_setters_replace_single_value() {
        let mut state = SelectionState::new();
        state.set_health("Heart").unwrap();
        state.set_health("Chronic").unwrap();
        assert_eq!(state.health(), HealthCondition::Chronic);
    }
}

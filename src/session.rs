use serde::Serialize;
use tracing::info;

use crate::catalog::{HealthCondition, IngredientCategory, SpiceLevel};
use crate::error::ConfiguratorResult;
use crate::order_gate::{OrderGate, OrderState};
use crate::recipe_generator::{generate, RecipeResult};
use crate::selection::SelectionState;

pub const ORDER_CONFIRMATION: &str = "\n\n✅ Your order is placed!";

/// One user's configurator session: the current selection, the latest
/// generated result and the order gate.
#[derive(Debug, Clone, Default)]
pub struct DishSession {
    selection: SelectionState,
    result: Option<RecipeResult>,
    gate: OrderGate,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub selection: SelectionState,
    pub result: Option<RecipeResult>,
    pub order_state: OrderState,
    pub can_order: bool,
    pub displayed_text: Option<String>,
}

impl DishSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn result(&self) -> Option<&RecipeResult> {
        self.result.as_ref()
    }

    pub fn order_state(&self) -> OrderState {
        self.gate.state()
    }

    pub fn can_order(&self) -> bool {
        OrderGate::can_order(self.result.as_ref())
    }

    pub fn toggle_ingredient(&mut self, category: IngredientCategory, id: &str) {
        self.selection.toggle_ingredient(category, id);
    }

    /// Selects every name in `names`, resolved against the catalog.
    /// Repeats are ignored, so a name given twice stays selected.
    pub fn select_ingredients<S: AsRef<str>>(
        &mut self,
        category: IngredientCategory,
        names: &[S],
    ) -> ConfiguratorResult<()> {
        for name in names {
            let id = category.resolve(name.as_ref())?;
            self.selection.select_ingredient(category, id);
        }
        Ok(())
    }

    pub fn set_health(&mut self, value: &str) -> ConfiguratorResult<()> {
        self.selection.set_health(value)
    }

    pub fn set_spice(&mut self, value: &str) -> ConfiguratorResult<()> {
        self.selection.set_spice(value)
    }

    pub fn set_health_condition(&mut self, health: HealthCondition) {
        self.selection.set_health_condition(health);
    }

    pub fn set_spice_level(&mut self, spice: SpiceLevel) {
        self.selection.set_spice_level(spice);
    }

    /// Generates from the current selection, replaces the previous result
    /// and resets the order gate, whatever kind of result came back.
    pub fn generate(&mut self) -> &RecipeResult {
        let result = generate(&self.selection);
        match &result {
            RecipeResult::Success(recipe) => info!(
                ingredients = recipe.ingredients.len(),
                health = %recipe.health,
                spice = %recipe.spice,
                "recipe generated"
            ),
            RecipeResult::Error { message } => info!(reason = %message, "recipe generation rejected"),
        }
        self.gate.reset();
        self.result.insert(result)
    }

    pub fn place_order(&mut self) -> OrderState {
        let state = self.gate.place_order(self.result.as_ref());
        if state == OrderState::Ordered {
            info!("order placed");
        }
        state
    }

    /// What the output panel shows; `None` until the first generation.
    pub fn displayed_text(&self) -> Option<String> {
        let result = self.result.as_ref()?;
        let mut text = result.display_text().to_string();
        if self.gate.is_ordered() {
            text.push_str(ORDER_CONFIRMATION);
        }
        Some(text)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selection: self.selection.clone(),
            result: self.result.clone(),
            order_state: self.order_state(),
            can_order: self.can_order(),
            displayed_text: self.displayed_text(),
        }
    }
}

use serde::Serialize;

use crate::catalog::{HealthCondition, SpiceLevel};
use crate::selection::SelectionState;

pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one ingredient.";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GeneratedRecipe {
    pub ingredients: Vec<String>,
    pub health: HealthCondition,
    pub spice: SpiceLevel,
    pub text: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecipeResult {
    Error { message: String },
    Success(GeneratedRecipe),
}

impl RecipeResult {
    /// True when an order may be placed against this result.
    pub fn is_success(&self) -> bool {
        matches!(self, RecipeResult::Success(_))
    }

    pub fn as_success(&self) -> Option<&GeneratedRecipe> {
        match self {
            RecipeResult::Success(recipe) => Some(recipe),
            RecipeResult::Error { .. } => None,
        }
    }

    /// The text shown to the user: the error message or the recipe body.
    pub fn display_text(&self) -> &str {
        match self {
            RecipeResult::Error { message } => message,
            RecipeResult::Success(recipe) => &recipe.text,
        }
    }
}

/// Maps a selection to a recipe. Never fails: an empty selection is
/// reported as `RecipeResult::Error`.
pub fn generate(state: &SelectionState) -> RecipeResult {
    let ingredients = state.all_ingredients();
    if ingredients.is_empty() {
        return RecipeResult::Error {
            message: EMPTY_SELECTION_MESSAGE.to_string(),
        };
    }

    let joined = ingredients.join(", ");
    let health = state.health();
    let spice = state.spice();

    let text = [
        format!("* Ingredients: {}", joined),
        format!("* Health Condition: {}", health),
        format!("* Spice Level: {}", spice),
        String::new(),
        "Recipe:".to_string(),
        format!("1. Wash & chop {}.", joined),
        format!("2. Heat oil, add spices for \"{}\" level.", spice),
        "3. Add ingredients, sauté till done.".to_string(),
        format!("4. Serve hot for your {}-friendly meal.", health),
    ]
    .join("\n");

    RecipeResult::Success(GeneratedRecipe {
        ingredients,
        health,
        spice,
        text,
    })
}

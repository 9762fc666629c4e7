pub mod catalog;
pub mod cli;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod order_gate;
pub mod recipe_generator;
pub mod render;
pub mod selection;
pub mod session;

pub use catalog::{HealthCondition, IngredientCategory, SpiceLevel, PROTEINS, VEGETABLES};
pub use error::{ConfiguratorError, ConfiguratorResult};
pub use order_gate::{OrderGate, OrderState};
pub use recipe_generator::{generate, GeneratedRecipe, RecipeResult, EMPTY_SELECTION_MESSAGE};
pub use selection::SelectionState;
pub use session::{DishSession, SessionSnapshot, ORDER_CONFIRMATION};

use thiserror::Error;

use crate::catalog::IngredientCategory;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfiguratorError {
    #[error("'{value}' is not a valid {kind}")]
    InvalidEnumValue { kind: &'static str, value: String },

    #[error("'{value}' is not in the {category} catalog")]
    UnknownIngredient {
        category: IngredientCategory,
        value: String,
    },

    #[error("Unknown command: {0}")]
    InvalidCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}

pub type ConfiguratorResult<T> = Result<T, ConfiguratorError>;

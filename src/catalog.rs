use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfiguratorError, ConfiguratorResult};

pub const VEGETABLES: &[&str] = &[
    "Bell Pepper",
    "Ginger",
    "Mushroom",
    "Leek",
    "Cauliflower",
    "Okra",
    "Beans",
    "Corn",
];

pub const PROTEINS: &[&str] = &["Mutton", "Chicken", "Fish", "Prawns", "Eggs"];

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    Vegetable,
    Protein,
}

impl IngredientCategory {
    /// Catalog entries for this category, in display order.
    pub fn catalog(self) -> &'static [&'static str] {
        match self {
            IngredientCategory::Vegetable => VEGETABLES,
            IngredientCategory::Protein => PROTEINS,
        }
    }

    /// Returns the canonical catalog spelling of `name`, ignoring ASCII case.
    pub fn lookup(self, name: &str) -> Option<&'static str> {
        let name = name.trim();
        self.catalog()
            .iter()
            .copied()
            .find(|entry| entry.eq_ignore_ascii_case(name))
    }

    /// Like `lookup`, but reports names outside the catalog as an error.
    pub fn resolve(self, name: &str) -> ConfiguratorResult<&'static str> {
        self.lookup(name).ok_or_else(|| ConfiguratorError::UnknownIngredient {
            category: self,
            value: name.to_string(),
        })
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientCategory::Vegetable => write!(f, "vegetable"),
            IngredientCategory::Protein => write!(f, "protein"),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HealthCondition {
    #[default]
    Thyroid,
    Diabetes,
    Heart,
    Chronic,
}

impl HealthCondition {
    pub const ALL: [HealthCondition; 4] = [
        HealthCondition::Thyroid,
        HealthCondition::Diabetes,
        HealthCondition::Heart,
        HealthCondition::Chronic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HealthCondition::Thyroid => "Thyroid",
            HealthCondition::Diabetes => "Diabetes",
            HealthCondition::Heart => "Heart",
            HealthCondition::Chronic => "Chronic",
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthCondition {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| ConfiguratorError::InvalidEnumValue {
                kind: "health condition",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpiceLevel {
    #[default]
    Mild,
    Medium,
    Spicy,
}

impl SpiceLevel {
    pub const ALL: [SpiceLevel; 3] = [SpiceLevel::Mild, SpiceLevel::Medium, SpiceLevel::Spicy];

    pub fn as_str(self) -> &'static str {
        match self {
            SpiceLevel::Mild => "Mild",
            SpiceLevel::Medium => "Medium",
            SpiceLevel::Spicy => "Spicy",
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpiceLevel {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ConfiguratorError::InvalidEnumValue {
                kind: "spice level",
                value: s.to_string(),
            })
    }
}

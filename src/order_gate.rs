use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::recipe_generator::RecipeResult;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    #[default]
    Idle,
    Ordered,
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderState::Idle => write!(f, "idle"),
            OrderState::Ordered => write!(f, "ordered"),
        }
    }
}

/// Two-state machine deciding whether the order confirmation is shown.
/// Only a successful recipe can move it to `Ordered`; any new generation
/// moves it back to `Idle`.
#[derive(Debug, Clone, Default)]
pub struct OrderGate {
    state: OrderState,
}

impl OrderGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    pub fn is_ordered(&self) -> bool {
        self.state == OrderState::Ordered
    }

    pub fn can_order(current: Option<&RecipeResult>) -> bool {
        current.is_some_and(RecipeResult::is_success)
    }

    /// A missing or failed result makes this a no-op rather than an error.
    pub fn place_order(&mut self, current: Option<&RecipeResult>) -> OrderState {
        if !Self::can_order(current) {
            debug!(state = %self.state, "order ignored, no recipe to order");
            return self.state;
        }
        if self.state == OrderState::Idle {
            debug!("order gate: idle -> ordered");
            self.state = OrderState::Ordered;
        }
        self.state
    }

    pub fn reset(&mut self) {
        self.state = OrderState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_generator::GeneratedRecipe;

    fn success() -> RecipeResult {
        RecipeResult::Success(GeneratedRecipe {
            ingredients: vec!["Leek".to_string()],
            health: Default::default(),
            spice: Default::default(),
            text: "recipe".to_string(),
        })
    }

    fn error() -> RecipeResult {
        RecipeResult::Error {
            message: "nope".to_string(),
        }
    }

    #[test]
    fn test_absent_or_error_result_is_noop() {
        let mut gate = OrderGate::new();
        assert_eq!(gate.place_order(None), OrderState::Idle);
        assert_eq!(gate.place_order(Some(&error())), OrderState::Idle);
        assert!(!gate.is_ordered());
    }

    #[test]
    fn test_success_orders_and_stays_ordered() {
        let mut gate = OrderGate::new();
        let result = success();
        assert_eq!(gate.place_order(Some(&result)), OrderState::Ordered);
        assert_eq!(gate.place_order(Some(&result)), OrderState::Ordered);
        assert!(gate.is_ordered());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut gate = OrderGate::new();
        gate.place_order(Some(&success()));
        gate.reset();
        assert_eq!(gate.state(), OrderState::Idle);
    }

    #[test]
    fn test_can_order_predicate() {
        assert!(!OrderGate::can_order(None));
        assert!(!OrderGate::can_order(Some(&error())));
        assert!(OrderGate::can_order(Some(&success())));
    }
}

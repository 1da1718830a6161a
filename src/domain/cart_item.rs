use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FoodItem;

/// One line of a cart or of a submitted order.
///
/// Holds its own copy of the dish so an order keeps the price it was placed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub food: FoodItem,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(food: FoodItem, quantity: u32) -> Self {
        Self { food, quantity }
    }

    pub fn line_total(&self) -> Decimal {
        self.food.price * Decimal::from(self.quantity)
    }
}

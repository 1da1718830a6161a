//! The current session's pending selections.
//!
//! Lives for the process only. Every mutation goes through [`Cart::apply`];
//! totals are derived from the lines on every read.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{CartItem, FoodItem};

/// A single cart mutation, in reducer form.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit, creating the line if needed.
    Add(FoodItem),
    Remove(String),
    /// Sets the quantity of an existing line. Zero or below removes it; a
    /// quantity above `u32::MAX` is refused and the line is left as it was.
    UpdateQuantity { food_id: String, quantity: i64 },
    Clear,
}

/// Cart lines keyed by food id. Ids are unique and quantities are at least 1.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(food) => {
                match self.items.iter_mut().find(|line| line.food.id == food.id) {
                    Some(line) => {
                        line.quantity = line.quantity.saturating_add(1);
                        debug!(food_id = %food.id, quantity = line.quantity, "Cart line incremented");
                    }
                    None => {
                        debug!(food_id = %food.id, "Cart line added");
                        self.items.push(CartItem::new(food, 1));
                    }
                }
            }
            CartAction::Remove(food_id) => {
                self.items.retain(|line| line.food.id != food_id);
                debug!(food_id = %food_id, "Cart line removed");
            }
            CartAction::UpdateQuantity { food_id, quantity } => {
                if quantity <= 0 {
                    return self.apply(CartAction::Remove(food_id));
                }
                let Ok(quantity) = u32::try_from(quantity) else {
                    warn!(food_id = %food_id, quantity, "Cart quantity out of range, ignored");
                    return;
                };
                if let Some(line) = self.items.iter_mut().find(|line| line.food.id == food_id) {
                    line.quantity = quantity;
                    debug!(food_id = %food_id, quantity, "Cart line quantity set");
                }
            }
            CartAction::Clear => {
                self.items.clear();
                debug!("Cart cleared");
            }
        }
    }

    pub fn add_item(&mut self, food: FoodItem) {
        self.apply(CartAction::Add(food));
    }

    pub fn remove_item(&mut self, food_id: &str) {
        self.apply(CartAction::Remove(food_id.to_string()));
    }

    pub fn update_quantity(&mut self, food_id: &str, quantity: i64) {
        self.apply(CartAction::UpdateQuantity {
            food_id: food_id.to_string(),
            quantity,
        });
    }

    pub fn clear_cart(&mut self) {
        self.apply(CartAction::Clear);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn quantity_of(&self, food_id: &str) -> Option<u32> {
        self.items
            .iter()
            .find(|line| line.food.id == food_id)
            .map(|line| line.quantity)
    }

    /// Sum of price × quantity over the current lines.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over the current lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Owned copy of the lines, for freezing into an order.
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.items.clone()
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dish on the menu. Reference data owned by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub rating: f32,
    pub is_veg: bool,
}

impl FoodItem {
    /// Creates a bare item with only the fields that matter to pricing and filtering.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: category.into(),
            rating: 0.0,
            is_veg: false,
        }
    }
}

/// Payload for adding a dish to the catalog.
#[derive(Debug, Clone)]
pub struct FoodItemCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub rating: f32,
    pub is_veg: bool,
}

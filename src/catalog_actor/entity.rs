use crate::actor_framework::Entity;
use crate::domain::{FoodItem, FoodItemCreate};

impl Entity for FoodItem {
    type Id = String;
    type CreateParams = FoodItemCreate;
    type Action = ();
    type ActionResult = ();

    const KIND: &'static str = "food_item";

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: FoodItemCreate) -> Result<Self, String> {
        if params.price.is_sign_negative() {
            return Err(format!("Negative price for {}: {}", params.name, params.price));
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            image: params.image,
            category: params.category,
            rating: params.rating,
            is_veg: params.is_veg,
        })
    }

    /// Catalog entries are reference data; there is nothing to act on.
    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::{FrameworkError, ResourceActor};
    use rust_decimal::Decimal;

    fn dish(cents: i64) -> FoodItemCreate {
        FoodItemCreate {
            name: "Tacos".to_string(),
            description: "Three soft tacos".to_string(),
            price: Decimal::new(cents, 2),
            image: String::new(),
            category: "Mexican".to_string(),
            rating: 4.0,
            is_veg: false,
        }
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = FoodItem::from_create_params("9".to_string(), dish(-1));
        assert!(matches!(result, Err(reason) if reason.contains("Tacos")));

        let free = FoodItem::from_create_params("9".to_string(), dish(0)).unwrap();
        assert_eq!(free.price, Decimal::ZERO);
        assert_eq!(free.category, "Mexican");
    }

    #[tokio::test]
    async fn test_actor_refuses_negative_price() {
        let (actor, client) = ResourceActor::<FoodItem>::new(10, || "9".to_string());
        tokio::spawn(actor.run());

        let result = client.create(dish(-250)).await;
        assert!(matches!(result, Err(FrameworkError::Rejected(_))));
        assert!(client.list().await.unwrap().is_empty());
    }
}

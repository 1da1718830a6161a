use chrono::{Duration, Utc};

use crate::domain::{CartItem, FoodItem, Order, OrderStatus};

fn line(menu: &[FoodItem], id: &str, quantity: u32) -> Option<CartItem> {
    menu.iter()
        .find(|food| food.id == id)
        .map(|food| CartItem::new(food.clone(), quantity))
}

fn demo_order(
    id: &str,
    user_id: &str,
    user_name: &str,
    items: Vec<CartItem>,
    status: OrderStatus,
    age: Duration,
    address: &str,
) -> Order {
    let total = items.iter().map(CartItem::line_total).sum();
    Order {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        items,
        total,
        status,
        created_at: Utc::now() - age,
        address: address.to_string(),
    }
}

/// Three historical orders spread across the lifecycle, built from `menu`.
///
/// Lines referring to dishes missing from `menu` are dropped.
pub fn demo_orders(menu: &[FoodItem]) -> Vec<Order> {
    vec![
        demo_order(
            "ORD-001",
            "1",
            "John Doe",
            [line(menu, "1", 2), line(menu, "2", 1)].into_iter().flatten().collect(),
            OrderStatus::Pending,
            Duration::zero(),
            "123 Main St, City",
        ),
        demo_order(
            "ORD-002",
            "2",
            "Jane Smith",
            line(menu, "4", 1).into_iter().collect(),
            OrderStatus::Preparing,
            Duration::hours(1),
            "456 Oak Ave, Town",
        ),
        demo_order(
            "ORD-003",
            "3",
            "Bob Wilson",
            [line(menu, "5", 2), line(menu, "7", 1)].into_iter().flatten().collect(),
            OrderStatus::Delivered,
            Duration::days(1),
            "789 Pine Rd, Village",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::demo_menu;
    use rust_decimal::Decimal;

    #[test]
    fn test_demo_orders_totals_match_their_lines() {
        let orders = demo_orders(&demo_menu());
        let totals: Vec<_> = orders.iter().map(|o| o.total).collect();
        assert_eq!(
            totals,
            vec![Decimal::new(3597, 2), Decimal::new(1899, 2), Decimal::new(4397, 2)]
        );
        assert_eq!(orders[2].status, OrderStatus::Delivered);
    }
}

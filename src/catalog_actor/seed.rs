use rust_decimal::Decimal;

use crate::domain::FoodItem;

// id, name, description, price in cents, image, category, rating, vegetarian
type Row = (&'static str, &'static str, &'static str, i64, &'static str, &'static str, f32, bool);

const MENU: [Row; 8] = [
    ("1", "Margherita Pizza", "Classic cheese pizza with fresh basil and tomato sauce", 1299, "photo-1574071318508-1cdbab80d002", "Pizza", 4.5, true),
    ("2", "Chicken Burger", "Juicy grilled chicken patty with lettuce and special sauce", 999, "photo-1568901346375-23c9450c58cd", "Burgers", 4.3, false),
    ("3", "Caesar Salad", "Crispy romaine lettuce with parmesan and croutons", 849, "photo-1546793665-c74683f339c1", "Salads", 4.1, true),
    ("4", "Sushi Platter", "Assorted fresh sushi rolls with soy sauce and wasabi", 1899, "photo-1579871494447-9811cf80d66c", "Sushi", 4.7, false),
    ("5", "Pasta Carbonara", "Creamy pasta with bacon, egg, and parmesan cheese", 1349, "photo-1612874742237-6526221588e3", "Pasta", 4.4, false),
    ("6", "Veggie Wrap", "Fresh vegetables wrapped in a soft tortilla with hummus", 799, "photo-1626700051175-6818013e1d4f", "Wraps", 4.0, true),
    ("7", "BBQ Ribs", "Slow-cooked ribs glazed with smoky BBQ sauce", 1699, "photo-1544025162-d76694265947", "BBQ", 4.6, false),
    ("8", "Mushroom Risotto", "Creamy arborio rice with wild mushrooms and truffle oil", 1449, "photo-1476124369491-e7addf5db371", "Pasta", 4.2, true),
];

/// The demo menu served by the mock catalog.
pub fn demo_menu() -> Vec<FoodItem> {
    MENU.iter()
        .map(|&(id, name, description, cents, image, category, rating, is_veg)| FoodItem {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price: Decimal::new(cents, 2),
            image: format!("https://images.unsplash.com/{}?w=400", image),
            category: category.to_string(),
            rating,
            is_veg,
        })
        .collect()
}

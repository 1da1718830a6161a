//! Client-side menu search and category filtering.

use crate::domain::FoodItem;

/// Search text plus an optional category. `category: None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub search: String,
    pub category: Option<String>,
}

impl MenuFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Case-insensitive name match and exact category match.
    pub fn matches(&self, food: &FoodItem) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty() || food.name.to_lowercase().contains(&needle);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| food.category == category);
        matches_search && matches_category
    }

    pub fn apply(&self, items: &[FoodItem]) -> Vec<FoodItem> {
        items.iter().filter(|food| self.matches(food)).cloned().collect()
    }
}

/// Distinct categories, in the order they first appear.
pub fn categories(items: &[FoodItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for food in items {
        if !seen.iter().any(|c| c == &food.category) {
            seen.push(food.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::demo_menu;

    fn names(items: &[FoodItem]) -> Vec<&str> {
        items.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let menu = demo_menu();
        assert_eq!(MenuFilter::all().apply(&menu).len(), menu.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let menu = demo_menu();
        let found = MenuFilter::all().search("PIZZA").apply(&menu);
        assert_eq!(names(&found), vec!["Margherita Pizza"]);
    }

    #[test]
    fn test_search_and_category_combine() {
        let menu = demo_menu();
        let pasta = MenuFilter::all().category("Pasta").apply(&menu);
        assert_eq!(names(&pasta), vec!["Pasta Carbonara", "Mushroom Risotto"]);

        let risotto = MenuFilter::all().category("Pasta").search("risotto").apply(&menu);
        assert_eq!(names(&risotto), vec!["Mushroom Risotto"]);

        let none = MenuFilter::all().category("Sushi").search("burger").apply(&menu);
        assert!(none.is_empty());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let menu = demo_menu();
        assert_eq!(
            categories(&menu),
            vec!["Pizza", "Burgers", "Salads", "Sushi", "Pasta", "Wraps", "BBQ"]
        );
    }
}

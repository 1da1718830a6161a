use crate::actor_framework::ResourceClient;
use crate::catalog_actor::CatalogError;
use crate::domain::FoodItem;

/// Client for the catalog provider. Read-only: `get_food_item` and `list_food_items`.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<FoodItem>,
}

impl_basic_client!(CatalogClient, FoodItem, CatalogError, food_item);

impl CatalogClient {
    /// Like `get_food_item`, but a missing dish is an error.
    pub async fn require_food_item(&self, id: impl Into<String>) -> Result<FoodItem, CatalogError> {
        let id = id.into();
        self.get_food_item(id.clone())
            .await?
            .ok_or(CatalogError::NotFound(id))
    }
}

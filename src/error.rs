use thiserror::Error;

use crate::app_system::{ConfigError, Notice};
use crate::auth::AuthError;
use crate::catalog_actor::CatalogError;
use crate::order_actor::OrderError;
use crate::session::SessionError;

/// Everything a user action on the storefront can fail with.
///
/// The first group is caught before any backend call and leaves state untouched.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Delivery address is required")]
    MissingAddress,
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Not logged in")]
    NotAuthenticated,
    #[error("Admin access required")]
    Forbidden,

    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Order placement failed: {0}")]
    PlaceOrder(#[source] OrderError),
    #[error("Loading orders failed: {0}")]
    LoadOrders(#[source] OrderError),
    /// Status updates and single-order lookups.
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// Validation failures, detected before any backend call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StorefrontError::MissingField(_)
                | StorefrontError::MissingAddress
                | StorefrontError::EmptyCart
                | StorefrontError::NotAuthenticated
                | StorefrontError::Forbidden
        )
    }

    /// Message shown to the user. Backend failures get a generic message;
    /// the detail goes to the log instead.
    pub fn user_message(&self) -> String {
        match self {
            StorefrontError::MissingField(_) => "Please fill in all fields".to_string(),
            StorefrontError::MissingAddress => "Please enter a delivery address".to_string(),
            StorefrontError::EmptyCart => "Your cart is empty".to_string(),
            StorefrontError::NotAuthenticated => "Please log in to continue".to_string(),
            StorefrontError::Forbidden => "Admin access required".to_string(),
            StorefrontError::Auth(AuthError::RegistrationFailed(_)) => {
                "Registration failed".to_string()
            }
            StorefrontError::Auth(_) => "Invalid credentials".to_string(),
            StorefrontError::Catalog(CatalogError::NotFound(_)) => {
                "That dish is no longer available".to_string()
            }
            StorefrontError::Catalog(_) => "Failed to load the menu".to_string(),
            StorefrontError::PlaceOrder(_) => "Failed to place order".to_string(),
            StorefrontError::LoadOrders(_) => "Failed to load orders".to_string(),
            StorefrontError::Order(OrderError::NotFound(id)) => format!("Order {} not found", id),
            StorefrontError::Order(_) => "Failed to update order".to_string(),
            StorefrontError::Session(_) => "Could not save your session".to_string(),
            StorefrontError::Config(_) => "Storefront is misconfigured".to_string(),
        }
    }

    pub fn notice(&self) -> Notice {
        Notice::error(self.user_message())
    }
}

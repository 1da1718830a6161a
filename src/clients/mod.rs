//! Cloneable handles for talking to the backend services.

#[macro_use]
mod macros;

mod auth_client;
mod catalog_client;
mod order_client;

pub use auth_client::AuthClient;
pub use catalog_client::CatalogClient;
pub use order_client::OrderClient;

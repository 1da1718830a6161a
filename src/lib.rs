//! # Food Frenzy storefront core
//!
//! Client-side state and workflows of a food-ordering storefront: who is
//! logged in, what is in the cart, and the order lifecycle
//! `PENDING → CONFIRMED → PREPARING → DELIVERED`.
//!
//! ## Layout
//!
//! - **Domain types** - Plain data shared by every layer → [`User`], [`FoodItem`], [`CartItem`], [`Order`]
//! - **Local state** - Owned by the storefront, never by a backend
//!     - **Session** - The authenticated identity, persisted across restarts → [`SessionStore`]
//!     - **Cart** - Pending selections with derived totals → [`Cart`]
//! - **Backends** - Mock services running as actors, reached through cloneable clients
//!     - **Auth** - Hand-written service with a message enum → [`AuthService`], [`AuthClient`]
//!     - **Catalog and orders** - Generic [`ResourceActor`] over an [`Entity`] → [`CatalogClient`], [`OrderClient`]
//! - **Views** - Pure functions over backend data → [`MenuFilter`], [`Dashboard`]
//! - **System** - Startup, user actions, and shutdown → [`StorefrontSystem`], [`setup_tracing`]
//!
//! ## Example
//!
//! ```ignore
//! let config = StorefrontConfig::from_env()?;
//! let mut system = StorefrontSystem::from_config(&config);
//!
//! system.login("jane@example.com", "secret").await?;
//! system.add_to_cart("1").await?;
//! let order = system.place_order("12 Main St").await?;
//! assert_eq!(order.status, OrderStatus::Pending);
//!
//! system.shutdown().await?;
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod auth;
pub mod cart;
pub mod catalog_actor;
pub mod clients;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod menu;
pub mod messages;
pub mod order_actor;
pub mod session;

#[cfg(test)]
mod mock_framework;

pub use actor_framework::{Entity, FrameworkError, ResourceActor, ResourceClient};
pub use app_system::{setup_tracing, Notice, NoticeLevel, StorefrontConfig, StorefrontSystem};
pub use auth::{AuthError, AuthService};
pub use cart::{Cart, CartAction};
pub use clients::{AuthClient, CatalogClient, OrderClient};
pub use dashboard::{Dashboard, OrderStats, StatusFilter};
pub use domain::*;
pub use error::StorefrontError;
pub use menu::{categories, MenuFilter};
pub use session::{FileStorage, MemoryStorage, SessionStorage, SessionStore};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::StorefrontConfig;
use crate::actor_framework::ResourceActor;
use crate::auth::AuthService;
use crate::cart::Cart;
use crate::catalog_actor::demo_menu;
use crate::clients::{AuthClient, CatalogClient, OrderClient};
use crate::dashboard::{Dashboard, StatusFilter};
use crate::domain::{FoodItem, Order, OrderStatus, OrderSubmission, RegisterRequest, User};
use crate::error::StorefrontError;
use crate::menu::{categories, MenuFilter};
use crate::order_actor::seed::demo_orders;
use crate::session::{FileStorage, SessionStorage, SessionStore};

/// Owns every piece of storefront state and the backend handles.
///
/// Created once at startup and torn down with [`StorefrontSystem::shutdown`].
/// Session and cart mutations take `&mut self`, so one system serves one user
/// action at a time.
///
/// **Startup Order:**
/// 1. Restore the session from storage
/// 2. Start the backends (auth, catalog, orders), seeding catalog and demo orders
/// 3. Hand back the coordinator with all clients
pub struct StorefrontSystem<S: SessionStorage> {
    pub auth_client: AuthClient,
    pub catalog_client: CatalogClient,
    pub order_client: OrderClient,
    session: SessionStore<S>,
    cart: Cart,
    handles: Vec<JoinHandle<()>>,
}

impl StorefrontSystem<FileStorage> {
    /// Starts the system with the session persisted under `config.session_dir`.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config, FileStorage::new(config.session_dir.clone()))
    }
}

impl<S: SessionStorage> StorefrontSystem<S> {
    /// Create and start the entire system. Must be called inside a tokio runtime.
    #[instrument(name = "storefront_system", skip_all, fields(buffer = config.channel_buffer))]
    pub fn new(config: &StorefrontConfig, storage: S) -> Self {
        info!("Starting storefront system");

        let session = SessionStore::restore(storage);
        let mut handles = Vec::new();

        let (auth_service, auth_client) =
            AuthService::new(config.channel_buffer, config.admin_email.clone());
        handles.push(tokio::spawn(auth_service.run()));

        let menu = demo_menu();
        let food_seq = Arc::new(AtomicU64::new(menu.len() as u64 + 1));
        let next_food_id = move || food_seq.fetch_add(1, Ordering::SeqCst).to_string();
        let (catalog_actor, catalog_resource_client) =
            ResourceActor::<FoodItem>::new(config.channel_buffer, next_food_id);
        let catalog_client = CatalogClient::new(catalog_resource_client);
        handles.push(tokio::spawn(catalog_actor.with_entities(menu.clone()).run()));

        let seeded = if config.seed_demo_orders {
            demo_orders(&menu)
        } else {
            Vec::new()
        };
        let next_order_id = || format!("ORD-{}", Uuid::new_v4().simple());
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.channel_buffer, next_order_id);
        let order_client = OrderClient::new(order_resource_client);
        handles.push(tokio::spawn(order_actor.with_entities(seeded).run()));

        info!("Storefront system started successfully");

        Self {
            auth_client,
            catalog_client,
            order_client,
            session,
            cart: Cart::new(),
            handles,
        }
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, StorefrontError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(StorefrontError::MissingField("email"));
        }
        if password.trim().is_empty() {
            return Err(StorefrontError::MissingField("password"));
        }

        let user = self.auth_client.login(email, password).await?;
        self.session.login(user.clone())?;
        Ok(user)
    }

    #[instrument(skip(self, request), fields(email = %request.email, role = ?request.role))]
    pub async fn register(&mut self, request: RegisterRequest) -> Result<User, StorefrontError> {
        if request.name.trim().is_empty() {
            return Err(StorefrontError::MissingField("name"));
        }
        if request.email.trim().is_empty() {
            return Err(StorefrontError::MissingField("email"));
        }
        if request.password.trim().is_empty() {
            return Err(StorefrontError::MissingField("password"));
        }

        let user = self.auth_client.register(request).await?;
        self.session.login(user.clone())?;
        Ok(user)
    }

    /// Ends the session. The cart belongs to the session and is emptied too.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<(), StorefrontError> {
        self.cart.clear_cart();
        self.session.logout()?;
        Ok(())
    }

    fn require_user(&self) -> Result<&User, StorefrontError> {
        self.session
            .current_user()
            .ok_or(StorefrontError::NotAuthenticated)
    }

    fn require_admin(&self) -> Result<&User, StorefrontError> {
        let user = self.require_user()?;
        if user.is_admin() {
            Ok(user)
        } else {
            warn!(user_id = %user.id, "Admin action refused");
            Err(StorefrontError::Forbidden)
        }
    }

    // -------------------------------------------------------------------------
    // Menu & cart
    // -------------------------------------------------------------------------

    pub async fn menu(&self, filter: &MenuFilter) -> Result<Vec<FoodItem>, StorefrontError> {
        let items = self.catalog_client.list_food_items().await?;
        Ok(filter.apply(&items))
    }

    pub async fn categories(&self) -> Result<Vec<String>, StorefrontError> {
        let items = self.catalog_client.list_food_items().await?;
        Ok(categories(&items))
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Looks the dish up in the catalog and adds one unit. Returns the new quantity.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&mut self, food_id: &str) -> Result<u32, StorefrontError> {
        let food = self.catalog_client.require_food_item(food_id).await?;
        self.cart.add_item(food);
        Ok(self.cart.quantity_of(food_id).unwrap_or(0))
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Submits the cart as an order for the session user.
    ///
    /// Session, address, and cart are checked before anything is sent. The
    /// cart is cleared only once the backend has accepted the order.
    #[instrument(skip(self, address), fields(items = self.cart.item_count(), total = %self.cart.total()))]
    pub async fn place_order(&mut self, address: &str) -> Result<Order, StorefrontError> {
        let user = self.require_user()?.clone();
        let address = address.trim();
        if address.is_empty() {
            return Err(StorefrontError::MissingAddress);
        }
        if self.cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        let submission = OrderSubmission {
            user_id: user.id,
            user_name: user.name,
            items: self.cart.snapshot(),
            total: self.cart.total(),
            address: address.to_string(),
        };

        match self.order_client.create_order(submission).await {
            Ok(order) => {
                self.cart.clear_cart();
                info!(order_id = %order.id, "Order placed");
                Ok(order)
            }
            Err(e) => {
                error!(error = %e, "Order placement failed, cart kept");
                Err(StorefrontError::PlaceOrder(e))
            }
        }
    }

    /// The session user's own orders.
    pub async fn my_orders(&self) -> Result<Vec<Order>, StorefrontError> {
        let user_id = self.require_user()?.id.clone();
        let orders = self
            .order_client
            .fetch_orders()
            .await
            .map_err(StorefrontError::LoadOrders)?;
        Ok(orders.into_iter().filter(|o| o.user_id == user_id).collect())
    }

    // -------------------------------------------------------------------------
    // Admin dashboard
    // -------------------------------------------------------------------------

    pub async fn dashboard(&self, filter: StatusFilter) -> Result<Dashboard, StorefrontError> {
        self.require_admin()?;
        let orders = self
            .order_client
            .fetch_orders()
            .await
            .map_err(StorefrontError::LoadOrders)?;
        Ok(Dashboard::build(orders, filter))
    }

    /// Moves an order one step along its lifecycle.
    pub async fn advance_order(&self, order_id: &str) -> Result<Order, StorefrontError> {
        self.require_admin()?;
        Ok(self.order_client.advance_order(order_id.to_string()).await?)
    }

    /// Moves an order to `status`, which must be its next status.
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Order, StorefrontError> {
        self.require_admin()?;
        Ok(self
            .order_client
            .update_order_status(order_id.to_string(), status)
            .await?)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Gracefully shutdown the entire system
    ///
    /// **Error Handling:** Log errors but continue shutdown to prevent hangs
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront system");

        if let Err(e) = self.order_client.shutdown().await {
            warn!(error = %e, "Order service already stopped");
        }
        if let Err(e) = self.catalog_client.shutdown().await {
            warn!(error = %e, "Catalog service already stopped");
        }
        if let Err(e) = self.auth_client.shutdown().await {
            warn!(error = %e, "Auth service already stopped");
        }

        let mut failures = 0;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                failures += 1;
            }
        }

        info!("Storefront system shutdown complete");
        if failures == 0 {
            Ok(())
        } else {
            Err(format!("{} service task(s) failed", failures))
        }
    }
}

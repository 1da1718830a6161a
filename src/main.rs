use tracing::{error, info, Instrument};

use food_frenzy::{
    setup_tracing, MenuFilter, Notice, StatusFilter, StorefrontConfig, StorefrontError,
    StorefrontSystem,
};

fn report<T>(result: &Result<T, StorefrontError>, on_success: impl FnOnce(&T) -> String) {
    let notice = match result {
        Ok(value) => Notice::success(on_success(value)),
        Err(e) => {
            error!(error = %e, "Action failed");
            e.notice()
        }
    };
    info!(%notice);
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| {
        let e = StorefrontError::from(e);
        error!(error = %e, "Invalid configuration");
        e.notice().to_string()
    })?;
    info!(session_dir = %config.session_dir.display(), "Starting storefront");

    let mut system = StorefrontSystem::from_config(&config);

    // A customer browses, fills the cart, and checks out.
    let span = tracing::info_span!("customer_checkout");
    let placed = async {
        let login = system.login("jane@example.com", "password").await;
        report(&login, |user| format!("Welcome back, {}!", user.name));

        let pizzas = system
            .menu(&MenuFilter::all().category("Pizza"))
            .await
            .map_err(|e| e.to_string())?;
        info!(count = pizzas.len(), "Pizza dishes on the menu");

        for food_id in ["1", "1", "2"] {
            let added = system.add_to_cart(food_id).await;
            report(&added, |quantity| format!("Added to cart ({} in cart)", quantity));
        }
        info!(
            items = system.cart().item_count(),
            total = %system.cart().total(),
            "Cart ready"
        );

        let order = system.place_order("12 Main St, City").await;
        report(&order, |order| format!("Order {} placed successfully!", order.id));

        system.logout().map_err(|e| e.to_string())?;
        Ok::<_, String>(order.ok())
    }
    .instrument(span)
    .await?;

    // The admin walks the new order through the kitchen.
    let span = tracing::info_span!("admin_dashboard");
    async {
        let login = system.login(&config.admin_email, "password").await;
        report(&login, |user| format!("Logged in as {} ({:?})", user.name, user.role));

        match system.dashboard(StatusFilter::All).await {
            Ok(dashboard) => info!(stats = ?dashboard.stats, "Dashboard loaded"),
            Err(e) => info!(notice = %e.notice()),
        }

        if let Some(order) = &placed {
            for _ in 0..3 {
                let advanced = system.advance_order(&order.id).await;
                report(&advanced, |order| format!("Order status updated to {}", order.status.label()));
            }
            // Delivered is final.
            let again = system.advance_order(&order.id).await;
            report(&again, |order| format!("Order status updated to {}", order.status.label()));
        }

        system.logout().map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Storefront stopped");
    Ok(())
}

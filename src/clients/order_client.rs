use tracing::{error, info, instrument, warn};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Order, OrderStatus, OrderSubmission};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Client for the order backend.
///
/// Callers are expected to keep at most one create or status update in flight
/// per order id; the backend linearizes whatever it receives.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

fn map_framework_error(e: FrameworkError) -> OrderError {
    match e {
        FrameworkError::NotFound(id) => OrderError::NotFound(id),
        FrameworkError::Rejected(reason) => OrderError::Rejected(reason),
        other => OrderError::ActorCommunicationError(other.to_string()),
    }
}

impl OrderClient {
    #[instrument(
        fields(user_id = %submission.user_id, lines = submission.items.len(), total = %submission.total),
        skip(self, submission)
    )]
    pub async fn create_order(&self, submission: OrderSubmission) -> Result<Order, OrderError> {
        let order = self
            .inner
            .create(submission)
            .await
            .map_err(map_framework_error)?;
        info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    /// Every order, in creation order.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list_orders().await
    }

    /// Moves an order to `status`, which must be the order's next status.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: String,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        self.act(order_id, OrderAction::SetStatus(status)).await
    }

    /// Moves an order one step forward, whatever its current status.
    #[instrument(skip(self))]
    pub async fn advance_order(&self, order_id: String) -> Result<Order, OrderError> {
        self.act(order_id, OrderAction::Advance).await
    }

    async fn act(&self, order_id: String, action: OrderAction) -> Result<Order, OrderError> {
        let outcome = self
            .inner
            .perform_action(order_id.clone(), action)
            .await
            .map_err(|e| {
                error!(error = %e, "Status update failed");
                map_framework_error(e)
            })?;

        match outcome {
            OrderActionResult::Updated(order) => Ok(order),
            OrderActionResult::InvalidTransition { from, to } => {
                warn!(%from, %to, "Status transition rejected");
                Err(OrderError::InvalidTransition { order_id, from, to })
            }
            OrderActionResult::Terminal => {
                warn!("Order already delivered");
                Err(OrderError::AlreadyDelivered(order_id))
            }
        }
    }
}

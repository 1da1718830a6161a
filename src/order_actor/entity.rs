use chrono::Utc;
use tracing::info;

use super::actions::{OrderAction, OrderActionResult};
use crate::actor_framework::Entity;
use crate::domain::{Order, OrderStatus, OrderSubmission};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderSubmission;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    const KIND: &'static str = "order";

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Order from a submission.
    ///
    /// The order starts as PENDING, timestamped now. Items and total are taken
    /// as submitted; address validation is the caller's job.
    fn from_create_params(id: String, params: OrderSubmission) -> Result<Self, String> {
        Ok(Self {
            id,
            user_id: params.user_id,
            user_name: params.user_name,
            items: params.items,
            total: params.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            address: params.address,
        })
    }

    /// Handles order status transitions.
    ///
    /// Rejections are reported as results rather than errors so the caller can
    /// tell them apart from plumbing failures.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        let current = self.status;
        let target = match action {
            OrderAction::SetStatus(target) => target,
            OrderAction::Advance => match current.next() {
                Some(next) => next,
                None => return Ok(OrderActionResult::Terminal),
            },
        };

        if !current.can_transition_to(target) {
            return Ok(OrderActionResult::InvalidTransition {
                from: current,
                to: target,
            });
        }

        self.status = target;
        info!(order_id = %self.id, from = %current, to = %target, "Order status changed");
        Ok(OrderActionResult::Updated(self.clone()))
    }
}

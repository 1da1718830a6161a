use crate::domain::{Order, OrderStatus};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to an explicit status.
    ///
    /// Only accepted when the target is the current status' `next()`.
    SetStatus(OrderStatus),
    /// Moves the order to whatever `next()` is at the time the actor handles it.
    Advance,
}

/// Results from OrderActions.
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The transition was applied; carries the updated order.
    Updated(Order),
    /// The requested target is not the next status. Nothing changed.
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
    /// The order is already delivered and cannot move.
    Terminal,
}

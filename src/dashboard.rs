//! Admin view over the order list: counts per status and a status filter.

use crate::domain::{Order, OrderStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub preparing: usize,
    pub delivered: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut stats, order| {
            stats.total += 1;
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Confirmed => stats.confirmed += 1,
                OrderStatus::Preparing => stats.preparing += 1,
                OrderStatus::Delivered => stats.delivered += 1,
            }
            stats
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status == status,
        }
    }
}

/// What the admin dashboard shows: overall stats plus the filtered orders.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub stats: OrderStats,
    pub filter: StatusFilter,
    pub orders: Vec<Order>,
}

impl Dashboard {
    /// Stats always cover every order; only the list is filtered.
    pub fn build(orders: Vec<Order>, filter: StatusFilter) -> Self {
        let stats = OrderStats::from_orders(&orders);
        let orders = orders.into_iter().filter(|o| filter.matches(o)).collect();
        Self { stats, filter, orders }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::demo_menu;
    use crate::order_actor::seed::demo_orders;

    #[test]
    fn test_stats_count_each_status() {
        let stats = OrderStats::from_orders(&demo_orders(&demo_menu()));
        assert_eq!(
            stats,
            OrderStats {
                total: 3,
                pending: 1,
                confirmed: 0,
                preparing: 1,
                delivered: 1,
            }
        );
    }

    #[test]
    fn test_filter_narrows_list_but_not_stats() {
        let dashboard = Dashboard::build(
            demo_orders(&demo_menu()),
            StatusFilter::Only(OrderStatus::Delivered),
        );
        assert_eq!(dashboard.stats.total, 3);
        assert_eq!(dashboard.orders.len(), 1);
        assert_eq!(dashboard.orders[0].id, "ORD-003");
    }
}

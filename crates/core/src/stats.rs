//! Dashboard aggregates.

use serde::{Deserialize, Serialize};

/// Inventory and account aggregates for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of cars in the inventory.
    pub total_inventory: u64,
    /// Number of registered accounts.
    pub total_users: u64,
    /// Sum of all inventory price values, in whole dollars.
    pub portfolio_value: u64,
    /// Open order count. There is no order pipeline yet, so the server
    /// reports a fixed placeholder.
    pub active_orders: u64,
}

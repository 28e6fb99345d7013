//! Admin dashboard stats handler.

use axum::{Json, extract::State};

use veloce_core::DashboardStats;

use crate::state::AppState;

/// Open order count placeholder. There is no order pipeline; the dashboard
/// card still wants a number.
const PLACEHOLDER_ACTIVE_ORDERS: u64 = 3;

/// Aggregate counts for the admin dashboard.
pub async fn stats(State(state): State<AppState>) -> Json<DashboardStats> {
    let cars = state.cars();
    Json(DashboardStats {
        total_inventory: cars.count() as u64,
        total_users: state.users().count() as u64,
        portfolio_value: cars.portfolio_value(),
        active_orders: PLACEHOLDER_ACTIVE_ORDERS,
    })
}

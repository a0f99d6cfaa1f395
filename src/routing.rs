//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    analytics::get_analytics_page,
    bill_payment::delete_bill_payment_endpoint,
    endpoints,
    home::get_home_page,
    not_found::get_404_not_found,
    record::{get_new_entry_page, record_transaction_endpoint},
    spending::delete_spending_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HOME, get(get_home_page))
        .route(
            endpoints::ADD_TRANSACTION,
            get(get_new_entry_page).post(record_transaction_endpoint),
        )
        .route(endpoints::ANALYTICS, get(get_analytics_page))
        .route(endpoints::DELETE_SPENDING, post(delete_spending_endpoint))
        .route(endpoints::DELETE_BILL, post(delete_bill_payment_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

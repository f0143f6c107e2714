use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers;
use crate::dashboards::d400_sales_overview::SalesOverviewState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<SalesOverviewState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D400 Sales Overview dashboard
        .route(
            "/api/d400/sales_overview",
            get(handlers::d400_sales_overview::get_sales_overview),
        )
        .route(
            "/api/d400/records",
            get(handlers::d400_sales_overview::get_records),
        )
        .with_state(state)
}

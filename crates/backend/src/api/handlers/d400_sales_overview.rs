use axum::{extract::State, Json};
use contracts::dashboards::d400_sales_overview::{SalesOverview, SalesRecord};
use std::sync::Arc;

use crate::dashboards::d400_sales_overview::SalesOverviewState;

/// GET /api/d400/sales_overview
pub async fn get_sales_overview(
    State(state): State<Arc<SalesOverviewState>>,
) -> Json<SalesOverview> {
    let overview = state.overview();
    tracing::info!(
        "D400 Dashboard: Returning overview with {} products and {} months",
        overview.product_share.len(),
        overview.months_count
    );
    Json(overview.clone())
}

/// GET /api/d400/records
pub async fn get_records(State(state): State<Arc<SalesOverviewState>>) -> Json<Vec<SalesRecord>> {
    tracing::info!("D400 Dashboard: Returning {} records", state.records().len());
    Json(state.records().to_vec())
}

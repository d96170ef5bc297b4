use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::{json, Value};

use seoul_sales_sdk::config::DEFAULT_TOP_N;

use crate::error::AppError;
use crate::routes::FilterParams;
use crate::state::AppState;

/// GET /api/summary?periods=20241&district_types=골목상권&industries=한식음식점,편의점&top=5
///
/// Aggregate the selected view: KPI totals, the top-N industry table, and
/// the gender and age-bracket breakdowns. The `display` block carries the
/// KPI figures preformatted in 억원 / 만건 units for the dashboard header.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Value>, AppError> {
    let top = params.top.unwrap_or(DEFAULT_TOP_N);
    let selection = params.into_selection();

    let count_selection = selection.clone();
    let count = state
        .sdk
        .run(move |s| s.records().count(&count_selection))
        .await?;
    let result = state
        .sdk
        .run(move |s| s.metrics().summarize_top(&selection, top))
        .await?;

    let display = json!({
        "totalSales": format!("{:.1} 억원", result.kpis.total_sales as f64 / 1e8),
        "totalTransactions": format!("{:.1} 만건", result.kpis.total_transactions as f64 / 1e4),
    });

    Ok(Json(json!({ "data": result, "display": display, "count": count })))
}

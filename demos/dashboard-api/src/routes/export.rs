use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::AppError;
use crate::routes::FilterParams;
use crate::state::AppState;

/// GET /api/export?periods=20241&district_types=골목상권
///
/// Download the filtered view as CSV in the encoding the dataset was loaded
/// with, ready to open in the same tools that read the original file.
pub async fn export_csv(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let selection = params.into_selection();
    let encoding = state
        .sdk
        .run(|s| s.dataset().map(|d| d.encoding().name()))
        .await?;
    let bytes = state.sdk.export_csv(&selection).await?;

    let headers = [
        (header::CONTENT_TYPE, format!("text/csv; charset={encoding}")),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"filtered_data.csv\"".to_string(),
        ),
    ];
    Ok((headers, bytes))
}

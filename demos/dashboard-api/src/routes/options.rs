use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/options
///
/// Selector options for the dashboard sidebar, together with the preset
/// default selection.
pub async fn get_options(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let (periods, district_types, industries, defaults) = state
        .sdk
        .run(|s| {
            Ok((
                s.dimensions().periods()?,
                s.dimensions().district_types()?,
                s.dimensions().industries()?,
                s.dimensions().default_selection()?,
            ))
        })
        .await?;

    Ok(Json(json!({
        "periods": periods,
        "districtTypes": district_types,
        "industries": industries,
        "defaults": {
            "periods": defaults.periods,
            "districtTypes": defaults.district_types,
            "industries": defaults.industries,
        },
    })))
}

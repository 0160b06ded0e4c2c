//! HTTP handlers for climate history endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use shared::ClimateRecord;

use crate::error::AppResult;
use crate::services::ClimateService;
use crate::AppState;

/// Full climate history, ascending by year
pub async fn get_climate_history(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClimateRecord>>> {
    let service = ClimateService::new(state.db);
    let records = service.list_all().await?;
    Ok(Json(records))
}

/// Current-season synchrony summary
#[derive(Debug, Serialize)]
pub struct SeasonSynchrony {
    pub synchrony_index: i32,
    pub record: Option<ClimateRecord>,
}

/// Quick-glance synchrony metric for the most recent year on record.
/// The index is 0 when the store holds no records.
pub async fn get_current_synchrony(
    State(state): State<AppState>,
) -> AppResult<Json<SeasonSynchrony>> {
    let service = ClimateService::new(state.db);
    let record = service.latest().await?;
    let synchrony_index = record.as_ref().map(|r| r.synchrony_index()).unwrap_or(0);

    Ok(Json(SeasonSynchrony {
        synchrony_index,
        record,
    }))
}

//! HTTP handlers for pollination risk advisories

use axum::{extract::State, Json};
use serde::Deserialize;

use shared::{Language, PollinationAdvisory};

use crate::error::AppResult;
use crate::services::{AdvisoryService, ClimateService, FarmerInputService};
use crate::AppState;

/// Request body for an advisory
#[derive(Debug, Deserialize)]
pub struct AdvisoryRequest {
    pub farmer_input_id: i64,
    #[serde(default)]
    pub lang: Language,
}

/// Run the risk advisory for a stored submission against the full
/// climate history. Generation failures resolve to the canned fallback,
/// so this only errors when the submission does not exist or the stores
/// are unreachable.
pub async fn request_advisory(
    State(state): State<AppState>,
    Json(request): Json<AdvisoryRequest>,
) -> AppResult<Json<PollinationAdvisory>> {
    let submission = FarmerInputService::new(state.db.clone())
        .get(request.farmer_input_id)
        .await?;
    let history = ClimateService::new(state.db.clone()).list_all().await?;

    let service = AdvisoryService::from_config(&state.config.generation);
    let advisory = service.analyze(&submission, &history, request.lang).await;

    Ok(Json(advisory))
}

//! HTTP handlers for farmer submission endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use shared::{FarmerSubmission, NewFarmerSubmission};

use crate::error::AppResult;
use crate::services::FarmerInputService;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CreatedSubmission {
    pub id: i64,
}

/// Store a farmer submission
pub async fn create_farmer_input(
    State(state): State<AppState>,
    Json(input): Json<NewFarmerSubmission>,
) -> AppResult<(StatusCode, Json<CreatedSubmission>)> {
    let service = FarmerInputService::new(state.db);
    let id = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedSubmission { id })))
}

/// List farmer submissions, newest first
pub async fn list_farmer_inputs(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FarmerSubmission>>> {
    let service = FarmerInputService::new(state.db);
    let submissions = service.list_all().await?;
    Ok(Json(submissions))
}

//! Route definitions for the BloomSync backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Climate history and the current-season synchrony summary
        .route("/climate-history", get(handlers::get_climate_history))
        .route("/synchrony", get(handlers::get_current_synchrony))
        // Farmer submissions
        .route("/farmer-input", post(handlers::create_farmer_input))
        .route("/farmer-inputs", get(handlers::list_farmer_inputs))
        // Risk advisories
        .route("/advisory", post(handlers::request_advisory))
}

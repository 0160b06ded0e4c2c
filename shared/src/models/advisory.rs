//! Pollination risk advisory models

use serde::{Deserialize, Serialize};

/// Structured advisory produced by the generation service (or by the
/// deterministic fallback when the service fails).
///
/// `risk_score` carries the localized Low/Moderate/High judgment
/// verbatim; only the shape of the payload is validated, not the
/// judgment itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollinationAdvisory {
    pub risk_score: String,
    pub explanation: String,
    pub recommendations: Vec<String>,
}

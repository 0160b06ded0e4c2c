//! Pollination risk advisory service
//!
//! Composes a prompt from a farmer submission and the climate history,
//! requests a strictly-JSON advisory from the generation service, and
//! serves a deterministic per-language fallback on any failure. Callers
//! always receive an advisory, never an error.

use std::time::Duration;

use shared::{ClimateRecord, FarmerSubmission, Language, PollinationAdvisory};

use crate::config::GenerationConfig;
use crate::external::GenerationClient;

/// Advisory service; owns no persistent state
#[derive(Clone)]
pub struct AdvisoryService {
    generation_client: Option<GenerationClient>,
}

impl AdvisoryService {
    /// Create a service with no generation client; every advisory
    /// resolves to the fallback
    pub fn new() -> Self {
        Self {
            generation_client: None,
        }
    }

    /// Create a service from the generation configuration. Without an
    /// API key the client stays unset.
    pub fn from_config(config: &GenerationConfig) -> Self {
        let generation_client = config.api_key.as_ref().map(|api_key| {
            GenerationClient::new(
                config.api_endpoint.clone(),
                api_key.clone(),
                config.model.clone(),
                Duration::from_secs(config.timeout_seconds),
            )
        });

        Self { generation_client }
    }

    /// Produce an advisory for a submission against the climate history.
    ///
    /// One attempt, no retry: any failure contacting the service, and
    /// any payload that is not well-formed advisory JSON, resolves to
    /// the canned fallback for the requested language.
    pub async fn analyze(
        &self,
        submission: &FarmerSubmission,
        history: &[ClimateRecord],
        language: Language,
    ) -> PollinationAdvisory {
        let client = match &self.generation_client {
            Some(client) => client,
            None => {
                tracing::warn!("Generation client not configured, serving fallback advisory");
                return fallback_advisory(language);
            }
        };

        let prompt = build_prompt(submission, history, language);

        match client.generate_json(&prompt).await {
            Ok(text) => parse_advisory(&text, language),
            Err(e) => {
                tracing::warn!("Generation request failed ({}), serving fallback advisory", e);
                fallback_advisory(language)
            }
        }
    }
}

impl Default for AdvisoryService {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose the analysis prompt embedding the submission and the
/// serialized climate history
pub fn build_prompt(
    submission: &FarmerSubmission,
    history: &[ClimateRecord],
    language: Language,
) -> String {
    let climate_json = serde_json::to_string(history).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Analyze the following pollination risk for a farmer:\n\
         Crop: {crop}\n\
         Category: {category}\n\
         Sowing Date: {sowing_date}\n\
         Location: {location}\n\
         \n\
         Historical Climate Data (last {years} years):\n\
         {climate}\n\
         \n\
         Based on the warming trend and bloom shifts, provide:\n\
         1. A risk score (Low, Moderate, High).\n\
         2. A brief explanation of the mismatch risk.\n\
         3. 3-4 actionable recommendations for the farmer (e.g., adjust sowing date, switch crops, etc.).\n\
         \n\
         Respond in {language}.\n\
         Format the response as JSON with keys: \"riskScore\", \"explanation\", \"recommendations\" (array of strings).",
        crop = submission.crop_name,
        category = submission.crop_category.as_str(),
        sowing_date = submission.sowing_date,
        location = submission.location_name,
        years = history.len(),
        climate = climate_json,
        language = language.prompt_name(),
    )
}

/// Parse a generation payload into a typed advisory.
///
/// A payload missing any of the three required keys, or with the wrong
/// types, fails closed into the fallback. The risk judgment itself is
/// passed through verbatim.
pub fn parse_advisory(text: &str, language: Language) -> PollinationAdvisory {
    match serde_json::from_str::<PollinationAdvisory>(text) {
        Ok(advisory) => advisory,
        Err(e) => {
            tracing::warn!("Malformed generation payload ({}), serving fallback advisory", e);
            fallback_advisory(language)
        }
    }
}

/// Fixed canned advisory served when the generation service fails
pub fn fallback_advisory(language: Language) -> PollinationAdvisory {
    match language {
        Language::Telugu => PollinationAdvisory {
            risk_score: "మధ్యస్థం".to_string(),
            explanation: "AI సలహాదారుని కనెక్ట్ చేయడంలో లోపం. చారిత్రక డేటా ఆధారంగా, మధ్యస్థ మార్పు అంచనా వేయబడింది."
                .to_string(),
            recommendations: vec![
                "స్థానిక వాతావరణ నమూనాలను పర్యవేక్షించండి".to_string(),
                "ముందస్తు విత్తడం గురించి ఆలోచించండి".to_string(),
                "స్థానిక వ్యవసాయ నిపుణులను సంప్రదించండి".to_string(),
            ],
        },
        Language::English => PollinationAdvisory {
            risk_score: "Moderate".to_string(),
            explanation:
                "Error connecting to AI advisor. Based on historical data, a moderate shift is expected."
                    .to_string(),
            recommendations: vec![
                "Monitor local weather patterns".to_string(),
                "Consider early sowing".to_string(),
                "Consult local agriculture experts".to_string(),
            ],
        },
    }
}

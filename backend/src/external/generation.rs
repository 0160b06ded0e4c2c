//! Text-generation API client
//!
//! Client for the hosted generative-language service that produces
//! pollination risk advisories. Requests run in strict-JSON mode and
//! carry a bounded timeout; callers decide how to handle failures.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Client for the text-generation service
#[derive(Clone)]
pub struct GenerationClient {
    api_endpoint: String,
    api_key: String,
    model: String,
    http_client: Client,
}

/// Request body for a generateContent call
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: RequestGenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct RequestGenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

/// Response from the generateContent API
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Pull the first candidate's generated text out of a response
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .and_then(|mut candidates| {
            if candidates.is_empty() {
                None
            } else {
                Some(candidates.remove(0))
            }
        })
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|mut parts| if parts.is_empty() { None } else { Some(parts.remove(0)) })
        .and_then(|part| part.text)
}

impl GenerationClient {
    /// Create a new generation client with a bounded request timeout
    pub fn new(api_endpoint: String, api_key: String, model: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_endpoint,
            api_key,
            model,
            http_client,
        }
    }

    /// Request a strict-JSON completion for a prompt, returning the raw
    /// generated text
    pub async fn generate_json(&self, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_endpoint, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: RequestGenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::GenerationError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::GenerationError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::GenerationError(format!("Failed to parse response: {}", e)))?;

        extract_text(result).ok_or_else(|| {
            AppError::GenerationError("Response contained no generated text".to_string())
        })
    }
}

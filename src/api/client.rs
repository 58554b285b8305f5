// NetVision - api/client.rs
//
// Blocking HTTP client for the generative-AI content endpoint.
//
// One client instance is shared by both request kinds. Calls block, so they
// always run on a background thread (see app::profiler / app::analyzer);
// the UI thread never touches this module directly.
//
// Failure policy: no retry, no backoff. Every failure maps to a typed
// ApiError and is surfaced to the user as a single message.

use crate::api::{prompt, schema};
use crate::core::model::ScanReport;
use crate::util::constants::{API_KEY_ENV_VARS, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::util::error::ApiError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the generative-AI client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Endpoint base URL (no trailing slash).
    pub base_url: String,

    /// Model identifier, e.g. "gemini-3-flash-preview".
    pub model: String,

    /// API key sent as the `x-goog-api-key` header.
    pub api_key: String,

    /// HTTP request timeout.
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Read the API key from the recognised environment variables, in order.
    pub fn api_key_from_env() -> Option<String> {
        API_KEY_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::util::constants::DEFAULT_API_BASE_URL.to_string(),
            model: crate::util::constants::DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

// =============================================================================
// Response envelope
// =============================================================================

/// Envelope returned by the generateContent endpoint.
/// Only the fields needed to extract the reply text are modelled.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extract the first candidate's text from a response envelope.
fn extract_text(response: GenerateResponse) -> Result<String, ApiError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::EmptyResponse)
}

/// Parse a profiling reply body into a `ScanReport`.
///
/// This is the only validation applied to the model's output: a serde parse
/// attempt against the declared shape.
pub fn parse_scan_report(text: &str) -> Result<ScanReport, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::MalformedBody { source: e })
}

// =============================================================================
// Client
// =============================================================================

/// Client for the generateContent endpoint.
pub struct GenerativeClient {
    http: reqwest::blocking::Client,
    config: ApiConfig,
}

impl GenerativeClient {
    /// Build a client with the configured timeout.
    ///
    /// Fails if no API key is configured or the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.api_key.is_empty() {
            return Err(ApiError::MissingApiKey);
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Http { source: e })?;
        Ok(Self { http, config })
    }

    /// Request a simulated port/vulnerability profile for `target`.
    pub fn profile_target(&self, target: &str) -> Result<ScanReport, ApiError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt::profile_prompt(target) }] }],
            "systemInstruction": { "parts": [{ "text": prompt::SYSTEM_INSTRUCTION }] },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema::scan_result_schema(),
            },
        });

        tracing::info!(scan_target = target, model = %self.config.model, "Profiling request dispatched");
        let text = self.generate(body)?;
        let report = parse_scan_report(&text)?;
        tracing::info!(
            scan_target = target,
            ports = report.ports.len(),
            "Profiling response parsed"
        );
        Ok(report)
    }

    /// Request a Markdown analysis of a (pre-truncated) log blob.
    pub fn analyze_log(&self, log_data: &str) -> Result<String, ApiError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt::analysis_prompt(log_data) }] }],
        });

        tracing::info!(
            chars = log_data.chars().count(),
            model = %self.config.model,
            "Analysis request dispatched"
        );
        self.generate(body)
    }

    /// POST a generateContent body and extract the reply text.
    fn generate(&self, body: Value) -> Result<String, ApiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .map_err(|e| ApiError::Http { source: e })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Endpoint returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateResponse = response
            .json()
            .map_err(|e| ApiError::Http { source: e })?;
        extract_text(envelope)
    }
}

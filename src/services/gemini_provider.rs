use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_MS: u64 = 90_000;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_endpoint: String,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
}

// Video requests pin the sampling parameters; text-only requests run on
// provider defaults.
const VIDEO_GENERATION_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.4,
    top_p: 0.8,
    top_k: 40,
    max_output_tokens: 2048,
};

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini not configured: {0}")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("empty response")]
    EmptyCandidates,
}

/// Client for the Gemini `generateContent` endpoint. One attempt per call,
/// bounded by the configured timeout; every failure maps to a `GeminiError`
/// the analysis pipeline turns into a structured error body.
#[derive(Clone)]
pub struct GeminiProvider {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn from_env() -> Self {
        let api_key = env_string("GEMINI_API_KEY");
        let model = env_string("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_endpoint = env_string("GEMINI_API_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
        let timeout = Duration::from_millis(env_u64("GEMINI_TIMEOUT").unwrap_or(DEFAULT_TIMEOUT_MS));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            config: GeminiConfig {
                api_key,
                model,
                api_endpoint,
                timeout,
            },
            client,
        }
    }

    pub fn is_available(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }

    /// Sends one generation request and returns the model's raw text reply.
    pub async fn generate(
        &self,
        prompt: &str,
        video_base64: Option<&str>,
    ) -> Result<String, GeminiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or(GeminiError::NotConfigured("GEMINI_API_KEY"))?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_endpoint.trim_end_matches('/'),
            self.config.model,
            api_key
        );

        let mut parts = vec![Part::Text {
            text: prompt.to_string(),
        }];
        if let Some(data) = video_base64 {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: "video/mp4".to_string(),
                    data: data.to_string(),
                },
            });
        }

        let payload = GenerateRequest {
            contents: vec![Content { parts }],
            generation_config: video_base64.map(|_| VIDEO_GENERATION_CONFIG),
        };

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, "Gemini request rejected");
            return Err(GeminiError::HttpStatus { status, body });
        }

        let bytes = response.bytes().await?;
        let envelope: GenerateResponse = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(error = %e, "failed to parse Gemini response envelope");
            GeminiError::Json(e)
        })?;

        envelope
            .first_text()
            .map(|text| text.to_string())
            .ok_or(GeminiError::EmptyCandidates)
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_u64(key: &str) -> Option<u64> {
    env_string(key)?.parse().ok()
}

//! Gemini generateContent adapter and the shared client singleton
//!
//! Gemini is both the reasoning tier and the engine behind simulation and
//! consensus, so its client is process-wide: constructed lazily from the
//! environment on first use and reused for the lifetime of the process.
//! Construction failures are not cached; a later call retries.

use crate::credentials;
use debate_application::ports::backend_gateway::{CompletionRequest, GatewayError};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::warn;

const GENERATE_URL_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

static SHARED: OnceLock<GeminiClient> = OnceLock::new();

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini client configured with an API key from the environment
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    /// Construct from `GEMINI_API_KEY`, falling back to `API_KEY`
    fn from_env() -> Result<Self, GatewayError> {
        let api_key = credentials::resolve(credentials::GEMINI_API_KEY)
            .or_else(|| credentials::resolve(credentials::FALLBACK_API_KEY))
            .ok_or_else(|| {
                GatewayError::MissingCredential(format!(
                    "set {} or {} in your environment",
                    credentials::GEMINI_API_KEY,
                    credentials::FALLBACK_API_KEY
                ))
            })?;
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
        })
    }

    /// Process-wide shared client
    ///
    /// A prior successful instance is always reused; if initialization
    /// races, one winner is kept (construction is a pure function of the
    /// environment, so either instance is equivalent).
    pub fn shared() -> Result<&'static GeminiClient, GatewayError> {
        if let Some(client) = SHARED.get() {
            return Ok(client);
        }
        let client = Self::from_env()?;
        Ok(SHARED.get_or_init(|| client))
    }

    /// Issue one generateContent request and extract the first candidate text
    pub async fn generate(
        &self,
        model: &str,
        request: &CompletionRequest,
    ) -> Result<String, GatewayError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: &request.message,
                }],
            }],
            system_instruction: request.system_instruction.as_deref().map(|text| Content {
                parts: vec![Part { text }],
            }),
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        let url = format!("{}/{}:generateContent", GENERATE_URL_BASE, model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Gemini call failed ({})", status);
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(first_candidate_text(parsed))
    }
}

fn first_candidate_text(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
        .unwrap_or_default()
}

//! HTTP gateway adapter
//!
//! Implements the application-layer [`BackendGateway`] port by routing each
//! model to its provider adapter based on model family.

use crate::credentials;
use crate::providers::{anthropic, gemini::GeminiClient, openai};
use async_trait::async_trait;
use debate_application::ports::backend_gateway::{
    BackendGateway, CompletionRequest, GatewayError,
};
use debate_domain::{Backend, Model};

/// Gateway speaking to the real provider endpoints over HTTPS
///
/// One reqwest client is shared by the OpenAI and Anthropic adapters; the
/// Gemini adapter carries its own via the process-wide singleton.
pub struct HttpBackendGateway {
    http: reqwest::Client,
}

impl HttpBackendGateway {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpBackendGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackendGateway for HttpBackendGateway {
    fn ensure_ready(&self) -> Result<(), GatewayError> {
        GeminiClient::shared().map(|_| ())
    }

    fn is_configured(&self, backend: Backend) -> bool {
        match backend {
            Backend::OpenAi => credentials::resolve(credentials::OPENAI_API_KEY).is_some(),
            Backend::Claude => credentials::resolve(credentials::ANTHROPIC_API_KEY).is_some(),
            Backend::Gemini => GeminiClient::shared().is_ok(),
        }
    }

    async fn complete(
        &self,
        model: &Model,
        request: CompletionRequest,
    ) -> Result<String, GatewayError> {
        if model.is_gpt() {
            let api_key = credentials::resolve(credentials::OPENAI_API_KEY).ok_or_else(|| {
                GatewayError::MissingCredential(credentials::OPENAI_API_KEY.to_string())
            })?;
            openai::complete(&self.http, &api_key, model.as_str(), &request).await
        } else if model.is_claude() {
            let api_key =
                credentials::resolve(credentials::ANTHROPIC_API_KEY).ok_or_else(|| {
                    GatewayError::MissingCredential(credentials::ANTHROPIC_API_KEY.to_string())
                })?;
            anthropic::complete(&self.http, &api_key, model.as_str(), &request).await
        } else {
            // Every remaining model is Gemini-family.
            GeminiClient::shared()?.generate(model.as_str(), &request).await
        }
    }
}

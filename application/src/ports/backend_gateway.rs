//! Backend gateway port
//!
//! Defines the interface for issuing completion requests against the
//! external text-generation services. Implementations (adapters) live in
//! the infrastructure layer.

use async_trait::async_trait;
use debate_domain::{BACKEND_TEMPERATURE, Backend, Model};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing API key: {0}")]
    MissingCredential(String),

    #[error("Request failed with HTTP status {status}: {detail}")]
    HttpStatus { status: u16, detail: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// One completion request: a single user message plus optional system
/// instruction and a fixed sampling temperature
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction, e.g. a persona voice or the synthesis role
    pub system_instruction: Option<String>,
    /// The sole user message
    pub message: String,
    /// Sampling temperature
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            system_instruction: None,
            message: message.into(),
            temperature: BACKEND_TEMPERATURE,
        }
    }

    pub fn with_system(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Gateway to the external text-generation backends
///
/// This port defines how the orchestrator reaches the outside world. The
/// credential policy lives behind `is_configured`, so "absent" and
/// "placeholder-valued" credentials are indistinguishable to callers.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Verify the synthesis-capable backend can be constructed
    ///
    /// This is the one failure mode the orchestrator does not absorb:
    /// without it neither simulation nor consensus can function.
    fn ensure_ready(&self) -> Result<(), GatewayError>;

    /// Whether a usable credential is configured for the given backend
    fn is_configured(&self, backend: Backend) -> bool;

    /// Issue one completion request against the given model and return
    /// the first generated text
    async fn complete(
        &self,
        model: &Model,
        request: CompletionRequest,
    ) -> Result<String, GatewayError>;
}

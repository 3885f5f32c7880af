//! In-memory gateway double for use case tests
//!
//! Behaviors are keyed either by model or by a substring of the system
//! instruction, so simulation and consensus calls (which share the same
//! engine model) can be scripted independently.

use crate::ports::backend_gateway::{BackendGateway, CompletionRequest, GatewayError};
use async_trait::async_trait;
use debate_domain::{Backend, Model};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted response for one call site
#[derive(Debug, Clone)]
pub(crate) struct Behavior {
    reply: Result<String, String>,
    delay_ms: u64,
}

impl Behavior {
    pub(crate) fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            delay_ms: 0,
        }
    }

    pub(crate) fn fail(detail: impl Into<String>) -> Self {
        Self {
            reply: Err(detail.into()),
            delay_ms: 0,
        }
    }

    pub(crate) fn after_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// One recorded completion call
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub model: Model,
    pub system_instruction: Option<String>,
    pub message: String,
    pub temperature: f32,
}

pub(crate) struct FakeGateway {
    ready_error: Option<String>,
    unconfigured: HashSet<Backend>,
    model_behaviors: HashMap<String, Behavior>,
    system_behaviors: Vec<(String, Behavior)>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeGateway {
    /// Ready gateway with every backend configured
    pub(crate) fn new() -> Self {
        Self {
            ready_error: None,
            unconfigured: HashSet::new(),
            model_behaviors: HashMap::new(),
            system_behaviors: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make `ensure_ready` fail with the given detail
    pub(crate) fn not_ready(mut self, detail: impl Into<String>) -> Self {
        self.ready_error = Some(detail.into());
        self
    }

    /// Treat the backend's credential as absent or placeholder-valued
    pub(crate) fn without_credential(mut self, backend: Backend) -> Self {
        self.unconfigured.insert(backend);
        self
    }

    /// Script the response for calls addressed to `model`
    pub(crate) fn on_model(mut self, model: Model, behavior: Behavior) -> Self {
        self.model_behaviors
            .insert(model.as_str().to_string(), behavior);
        self
    }

    /// Script the response for calls whose system instruction contains
    /// `fragment`; takes precedence over model behaviors
    pub(crate) fn on_system(mut self, fragment: impl Into<String>, behavior: Behavior) -> Self {
        self.system_behaviors.push((fragment.into(), behavior));
        self
    }

    /// All recorded calls addressed to `model`
    pub(crate) fn calls_to(&self, model: Model) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.model == model)
            .cloned()
            .collect()
    }

    /// Total number of completion calls issued
    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn behavior_for(&self, model: &Model, request: &CompletionRequest) -> Option<Behavior> {
        if let Some(system) = &request.system_instruction {
            for (fragment, behavior) in &self.system_behaviors {
                if system.contains(fragment.as_str()) {
                    return Some(behavior.clone());
                }
            }
        }
        self.model_behaviors.get(model.as_str()).cloned()
    }
}

#[async_trait]
impl BackendGateway for FakeGateway {
    fn ensure_ready(&self) -> Result<(), GatewayError> {
        match &self.ready_error {
            Some(detail) => Err(GatewayError::MissingCredential(detail.clone())),
            None => Ok(()),
        }
    }

    fn is_configured(&self, backend: Backend) -> bool {
        !self.unconfigured.contains(&backend)
    }

    async fn complete(
        &self,
        model: &Model,
        request: CompletionRequest,
    ) -> Result<String, GatewayError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.clone(),
            system_instruction: request.system_instruction.clone(),
            message: request.message.clone(),
            temperature: request.temperature,
        });

        let Some(behavior) = self.behavior_for(model, &request) else {
            return Err(GatewayError::Transport(format!(
                "no scripted behavior for {}",
                model
            )));
        };

        if behavior.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(behavior.delay_ms)).await;
        }

        behavior.reply.map_err(GatewayError::Transport)
    }
}

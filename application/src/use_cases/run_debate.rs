//! Run Debate use case
//!
//! Orchestrates one full debate cycle: fan-out to the three backends,
//! fan-in into the consensus call, and assembly of the aggregate result.

use crate::ports::backend_gateway::{BackendGateway, GatewayError};
use crate::use_cases::callers::{call_backend, synthesize};
use crate::use_cases::timing::measure;
use debate_domain::{
    Backend, DebateResult, DebateTimings, ModelResponses, PersonaRegistry, Question,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{info, warn};

/// Errors that can abort a debate
///
/// Everything else (per-backend failures, synthesis failures) is absorbed
/// into in-band placeholder text, so the result shape is always complete.
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("Synthesis backend is not configured: {0}")]
    Configuration(#[source] GatewayError),

    #[error("Backend task failed to complete: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Input for the RunDebate use case
#[derive(Debug, Clone)]
pub struct RunDebateInput {
    /// The question to debate
    pub question: Question,
    /// Persona voices used when a backend must be simulated
    pub personas: PersonaRegistry,
}

impl RunDebateInput {
    pub fn new(question: impl Into<Question>) -> Self {
        Self {
            question: question.into(),
            personas: PersonaRegistry::builtin(),
        }
    }

    pub fn with_personas(mut self, personas: PersonaRegistry) -> Self {
        self.personas = personas;
        self
    }
}

/// Use case for running one debate cycle
pub struct RunDebateUseCase<G: BackendGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: BackendGateway + 'static> RunDebateUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute one debate cycle
    ///
    /// The synthesis credential is verified before any backend call is
    /// issued; a missing credential is the only absorbed-nowhere failure.
    /// The three backend calls run concurrently and are all awaited, then
    /// the consensus call runs strictly after.
    pub async fn execute(&self, input: RunDebateInput) -> Result<DebateResult, RunDebateError> {
        self.gateway
            .ensure_ready()
            .map_err(RunDebateError::Configuration)?;

        info!("Starting debate with {} backends", Backend::all().len());
        let started = Instant::now();

        let mut join_set = JoinSet::new();
        let personas = Arc::new(input.personas);

        for backend in Backend::all() {
            let gateway = Arc::clone(&self.gateway);
            let personas = Arc::clone(&personas);
            let question = input.question.content().to_string();

            join_set.spawn(async move {
                let (outcome, elapsed_ms) =
                    measure(call_backend(gateway.as_ref(), &personas, backend, &question)).await;
                (backend, outcome, elapsed_ms)
            });
        }

        let mut models = ModelResponses::default();
        let mut timings = DebateTimings::default();

        // Completion order is unconstrained; each result lands in its own
        // slot keyed by backend.
        while let Some(joined) = join_set.join_next().await {
            let (backend, outcome, elapsed_ms) = joined?;

            if outcome.is_unavailable() {
                warn!("Backend {} produced no answer ({}ms)", backend, elapsed_ms);
            } else if outcome.is_simulated() {
                info!("Backend {} was simulated ({}ms)", backend, elapsed_ms);
            } else {
                info!("Backend {} answered ({}ms)", backend, elapsed_ms);
            }

            models.set(backend, outcome.into_text(backend));
            timings.set_backend(backend, elapsed_ms);
        }

        // Hard data dependency: consensus consumes all three texts.
        let (final_answer, consensus_ms) = measure(synthesize(
            self.gateway.as_ref(),
            input.question.content(),
            &models,
        ))
        .await;
        timings.consensus = consensus_ms;
        timings.total = started.elapsed().as_millis() as u64;

        info!("Debate complete in {}ms", timings.total);

        Ok(DebateResult::new(
            input.question.into_content(),
            models,
            timings,
            final_answer,
        ))
    }
}

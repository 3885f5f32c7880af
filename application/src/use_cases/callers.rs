//! Backend callers with fallback policy
//!
//! One caller per backend, all sharing the same contract: they never raise.
//! Every failure path resolves to a [`BackendOutcome`] variant, so the
//! orchestrator's fan-out can join unconditionally.

use crate::ports::backend_gateway::{BackendGateway, CompletionRequest};
use debate_domain::{
    Backend, BackendOutcome, CONSENSUS_TEMPERATURE, Model, ModelResponses, PersonaRegistry,
    PromptTemplate,
};
use tracing::{error, warn};

/// Fixed notice returned when the consensus call fails
pub(crate) const CONSENSUS_FAILURE_NOTICE: &str = "System Error: Consensus generation failed.";

/// Notice returned when the consensus call succeeds but produces no text
pub(crate) const EMPTY_CONSENSUS_NOTICE: &str = "Unable to generate consensus.";

/// Collect one answer for the given backend
///
/// The analytic and nuanced tiers fall back to simulation when their
/// credential is absent or the call fails. The reasoning tier shares
/// credentials with the simulation engine, so it has no fallback; its
/// failures carry the error detail instead.
pub(crate) async fn call_backend<G: BackendGateway + ?Sized>(
    gateway: &G,
    personas: &PersonaRegistry,
    backend: Backend,
    question: &str,
) -> BackendOutcome {
    match backend {
        Backend::OpenAi => {
            call_with_fallback(gateway, personas, backend, Model::Gpt4o, question).await
        }
        Backend::Claude => {
            call_with_fallback(gateway, personas, backend, Model::Claude35Sonnet, question).await
        }
        Backend::Gemini => call_reasoning(gateway, question).await,
    }
}

/// Call one simulatable backend, delegating to simulation on any failure
async fn call_with_fallback<G: BackendGateway + ?Sized>(
    gateway: &G,
    personas: &PersonaRegistry,
    backend: Backend,
    model: Model,
    question: &str,
) -> BackendOutcome {
    // Absent and placeholder credentials take the same path: no network call.
    if !gateway.is_configured(backend) {
        return simulate(gateway, personas, backend, question).await;
    }

    match gateway.complete(&model, CompletionRequest::new(question)).await {
        Ok(text) if text.trim().is_empty() => BackendOutcome::Answered(format!(
            "[{} provided no response]",
            backend.display_name()
        )),
        Ok(text) => BackendOutcome::Answered(text),
        Err(e) => {
            warn!("Backend {} call failed: {}. Falling back to simulation.", backend, e);
            simulate(gateway, personas, backend, question).await
        }
    }
}

/// Call the reasoning tier; no simulation fallback
async fn call_reasoning<G: BackendGateway + ?Sized>(
    gateway: &G,
    question: &str,
) -> BackendOutcome {
    match gateway
        .complete(&Model::Gemini3Pro, CompletionRequest::new(question))
        .await
    {
        Ok(text) if text.trim().is_empty() => BackendOutcome::Answered(format!(
            "[{} provided no response]",
            Backend::Gemini.display_name()
        )),
        Ok(text) => BackendOutcome::Answered(text),
        Err(e) => {
            error!("Backend {} call failed: {}", Backend::Gemini, e);
            BackendOutcome::Unavailable(e.to_string())
        }
    }
}

/// Answer in the stylistic voice of an unavailable backend
///
/// Issues one call to the simulation engine with the persona's instruction
/// as system prompt. Never raises; a failed simulation resolves to
/// `Unavailable` with the error detail.
pub(crate) async fn simulate<G: BackendGateway + ?Sized>(
    gateway: &G,
    personas: &PersonaRegistry,
    backend: Backend,
    question: &str,
) -> BackendOutcome {
    let Some(persona) = personas.get(backend) else {
        return BackendOutcome::Unavailable(format!("no persona registered for {}", backend));
    };

    let request =
        CompletionRequest::new(question).with_system(persona.style_instruction.clone());

    match gateway.complete(&Model::Gemini25Flash, request).await {
        Ok(text) if text.trim().is_empty() => {
            BackendOutcome::Simulated(format!("[{} simulation failed]", persona.display_name))
        }
        Ok(text) => BackendOutcome::Simulated(text),
        Err(e) => {
            warn!("Simulation failed for {}: {}", backend, e);
            BackendOutcome::Unavailable(e.to_string())
        }
    }
}

/// Synthesize the three collected answers into one consensus text
///
/// Always produces a final answer: any failure resolves to the fixed
/// failure notice rather than raising.
pub(crate) async fn synthesize<G: BackendGateway + ?Sized>(
    gateway: &G,
    question: &str,
    models: &ModelResponses,
) -> String {
    let request = CompletionRequest::new(PromptTemplate::consensus_prompt(question, models))
        .with_system(PromptTemplate::consensus_system())
        .with_temperature(CONSENSUS_TEMPERATURE);

    match gateway.complete(&Model::Gemini25Flash, request).await {
        Ok(text) if text.trim().is_empty() => EMPTY_CONSENSUS_NOTICE.to_string(),
        Ok(text) => text,
        Err(e) => {
            error!("Error generating consensus: {}", e);
            CONSENSUS_FAILURE_NOTICE.to_string()
        }
    }
}

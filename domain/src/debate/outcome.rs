//! Tagged outcome of a single backend call
//!
//! Backend callers never raise; every failure path resolves to one of these
//! variants. The tag survives until final assembly so that tests can observe
//! the fallback decision, and only [`BackendOutcome::into_text`] flattens it
//! into the display string the presentation layer sees.

use crate::Backend;

/// How a single backend produced (or failed to produce) its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendOutcome {
    /// The backend itself answered
    Answered(String),
    /// The simulation engine answered in the backend's voice
    Simulated(String),
    /// No text was produced; carries the error detail
    Unavailable(String),
}

impl BackendOutcome {
    /// Whether this outcome came from the simulation fallback
    pub fn is_simulated(&self) -> bool {
        matches!(self, BackendOutcome::Simulated(_))
    }

    /// Whether the backend produced no usable text at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, BackendOutcome::Unavailable(_))
    }

    /// Flatten into the display text stored in [`ModelResponses`]
    ///
    /// The reasoning backend has no simulation fallback, so its failures
    /// surface as a connection-error placeholder; for the simulatable
    /// backends the only unavailable path is a failed simulation.
    ///
    /// [`ModelResponses`]: crate::ModelResponses
    pub fn into_text(self, backend: Backend) -> String {
        match self {
            BackendOutcome::Answered(text) | BackendOutcome::Simulated(text) => text,
            BackendOutcome::Unavailable(detail) => match backend {
                Backend::Gemini => format!("[Gemini Connection Error: {}]", detail),
                Backend::OpenAi | Backend::Claude => {
                    format!("[Simulation Error: {}]", detail)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answered_text_passes_through() {
        let outcome = BackendOutcome::Answered("four".to_string());
        assert_eq!(outcome.into_text(Backend::OpenAi), "four");
    }

    #[test]
    fn test_simulated_text_passes_through() {
        let outcome = BackendOutcome::Simulated("four, probably".to_string());
        assert!(outcome.is_simulated());
        assert_eq!(outcome.into_text(Backend::Claude), "four, probably");
    }

    #[test]
    fn test_unavailable_reasoning_backend_embeds_detail() {
        let outcome = BackendOutcome::Unavailable("timeout".to_string());
        assert_eq!(
            outcome.into_text(Backend::Gemini),
            "[Gemini Connection Error: timeout]"
        );
    }

    #[test]
    fn test_unavailable_simulatable_backend_embeds_detail() {
        let outcome = BackendOutcome::Unavailable("503".to_string());
        assert_eq!(
            outcome.into_text(Backend::OpenAi),
            "[Simulation Error: 503]"
        );
    }
}

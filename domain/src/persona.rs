//! Persona profiles for simulated backends
//!
//! When a backend has no usable credential its answer is produced by the
//! simulation engine speaking in that backend's voice. The voice is data,
//! not code: callers inject a [`PersonaRegistry`], so tests can substitute
//! deterministic personas.

use crate::Backend;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stylistic instruction profile for one simulated backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Name shown in placeholder texts
    pub display_name: String,
    /// System instruction handed to the simulation engine
    pub style_instruction: String,
}

impl Persona {
    pub fn new(display_name: impl Into<String>, style_instruction: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            style_instruction: style_instruction.into(),
        }
    }
}

/// Mapping from backend to its simulation persona
///
/// The reasoning backend deliberately has no entry: it IS the simulation
/// engine, so falling back to itself would be circular.
#[derive(Debug, Clone, Default)]
pub struct PersonaRegistry {
    personas: HashMap<Backend, Persona>,
}

impl PersonaRegistry {
    /// Empty registry; useful as a base for test-specific personas
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in personas for the two simulatable backends
    pub fn builtin() -> Self {
        Self::empty()
            .with_persona(
                Backend::OpenAi,
                Persona::new(
                    "OpenAI GPT-4o",
                    "You are OpenAI's GPT-4o. You are participating in a technical debate. \
                     Provide a response that is highly logical, data-driven, and analytical. \
                     Structure your answer with clear headings. Do not mention you are simulating.",
                ),
            )
            .with_persona(
                Backend::Claude,
                Persona::new(
                    "Anthropic Claude 3.5 Sonnet",
                    "You are Anthropic's Claude 3.5 Sonnet. You are participating in a technical \
                     debate. Provide a response that is nuanced, ethical, and considers edge \
                     cases. Use a conversational but professional tone. Do not mention you are \
                     simulating.",
                ),
            )
    }

    /// Add or replace the persona for a backend
    pub fn with_persona(mut self, backend: Backend, persona: Persona) -> Self {
        self.personas.insert(backend, persona);
        self
    }

    /// Get the persona for a backend, if one is registered
    pub fn get(&self, backend: Backend) -> Option<&Persona> {
        self.personas.get(&backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_simulatable_backends_only() {
        let registry = PersonaRegistry::builtin();
        assert!(registry.get(Backend::OpenAi).is_some());
        assert!(registry.get(Backend::Claude).is_some());
        assert!(registry.get(Backend::Gemini).is_none());
    }

    #[test]
    fn test_builtin_instructions_hide_the_simulation() {
        let registry = PersonaRegistry::builtin();
        for backend in [Backend::OpenAi, Backend::Claude] {
            let persona = registry.get(backend).unwrap();
            assert!(persona.style_instruction.contains("Do not mention"));
        }
    }

    #[test]
    fn test_with_persona_replaces_existing_entry() {
        let registry = PersonaRegistry::builtin().with_persona(
            Backend::OpenAi,
            Persona::new("Test Voice", "Always answer with the word four."),
        );
        assert_eq!(
            registry.get(Backend::OpenAi).unwrap().display_name,
            "Test Voice"
        );
    }
}

//! Debate value objects - immutable result types for a debate session.
//!
//! These types represent the single aggregate returned to the caller:
//! - [`ModelResponses`] - One text per backend, always complete
//! - [`DebateTimings`] - Per-call wall-clock durations in milliseconds
//! - [`DebateResult`] - The full snapshot handed to the presentation layer

use crate::Backend;
use serde::{Deserialize, Serialize};

/// One answer text per backend
///
/// All three entries are always present after a successful orchestration.
/// An individual backend failure is represented by a placeholder string
/// inside its slot, never by a missing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResponses {
    pub openai: String,
    pub claude: String,
    pub gemini: String,
}

impl ModelResponses {
    /// Get the text for a backend
    pub fn get(&self, backend: Backend) -> &str {
        match backend {
            Backend::OpenAi => &self.openai,
            Backend::Claude => &self.claude,
            Backend::Gemini => &self.gemini,
        }
    }

    /// Set the text for a backend
    pub fn set(&mut self, backend: Backend, text: String) {
        match backend {
            Backend::OpenAi => self.openai = text,
            Backend::Claude => self.claude = text,
            Backend::Gemini => self.gemini = text,
        }
    }

    /// Iterate over (backend, text) pairs in stable order
    pub fn iter(&self) -> impl Iterator<Item = (Backend, &str)> {
        Backend::all().into_iter().map(|b| (b, self.get(b)))
    }
}

/// Wall-clock duration of each call, in milliseconds
///
/// `total` spans the whole orchestration and is measured independently,
/// not derived by summing the others: the three backend calls overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateTimings {
    pub openai: u64,
    pub claude: u64,
    pub gemini: u64,
    pub consensus: u64,
    pub total: u64,
}

impl DebateTimings {
    /// Get the duration of a backend call
    pub fn backend(&self, backend: Backend) -> u64 {
        match backend {
            Backend::OpenAi => self.openai,
            Backend::Claude => self.claude,
            Backend::Gemini => self.gemini,
        }
    }

    /// Set the duration of a backend call
    pub fn set_backend(&mut self, backend: Backend, elapsed_ms: u64) {
        match backend {
            Backend::OpenAi => self.openai = elapsed_ms,
            Backend::Claude => self.claude = elapsed_ms,
            Backend::Gemini => self.gemini = elapsed_ms,
        }
    }
}

/// Complete result of a debate session
///
/// This is the sole unit of output; nothing is streamed and no field is
/// optional, so the presentation layer never special-cases partial results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateResult {
    /// The original question
    pub question: String,
    /// One text per backend
    pub models: ModelResponses,
    /// Per-call and total durations
    pub timings: DebateTimings,
    /// The synthesized consensus answer
    pub final_answer: String,
}

impl DebateResult {
    pub fn new(
        question: impl Into<String>,
        models: ModelResponses,
        timings: DebateTimings,
        final_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            models,
            timings,
            final_answer: final_answer.into(),
        }
    }
}

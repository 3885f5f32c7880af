//! Backend identity value object

use serde::{Deserialize, Serialize};

/// One of the three fixed debate participants (Value Object)
///
/// The identifier set is stable: every [`ModelResponses`] and
/// [`DebateTimings`](crate::DebateTimings) record carries exactly one entry
/// per backend, regardless of how each backend produced its text.
///
/// [`ModelResponses`]: crate::ModelResponses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The analytic tier (simulatable)
    OpenAi,
    /// The nuanced tier (simulatable)
    Claude,
    /// The reasoning tier; shares credentials with the simulation engine,
    /// so it has no fallback path of its own
    Gemini,
}

impl Backend {
    /// Stable identifier used as the key in result records
    pub fn id(&self) -> &'static str {
        match self {
            Backend::OpenAi => "openai",
            Backend::Claude => "claude",
            Backend::Gemini => "gemini",
        }
    }

    /// Human-readable name shown in placeholder texts
    pub fn display_name(&self) -> &'static str {
        match self {
            Backend::OpenAi => "OpenAI GPT-4o",
            Backend::Claude => "Anthropic Claude 3.5 Sonnet",
            Backend::Gemini => "Google Gemini",
        }
    }

    /// All backends, in the order they appear in result records
    pub fn all() -> [Backend; 3] {
        [Backend::OpenAi, Backend::Claude, Backend::Gemini]
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

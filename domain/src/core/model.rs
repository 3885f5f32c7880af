//! Model value object representing an LLM model

/// Concrete LLM models addressable through the gateway (Value Object)
///
/// The family predicates (`is_gpt`, `is_claude`, `is_gemini`) are what the
/// infrastructure layer uses to route a completion request to the right
/// provider adapter; every model belongs to exactly one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Model {
    /// Analytic tier
    Gpt4o,
    /// Nuanced tier
    Claude35Sonnet,
    /// Reasoning tier
    Gemini3Pro,
    /// Simulation and consensus engine
    Gemini25Flash,
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt4o => "gpt-4o",
            Model::Claude35Sonnet => "claude-3-5-sonnet-20240620",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::Gemini25Flash => "gemini-2.5-flash",
        }
    }

    /// Check if this is a GPT model
    pub fn is_gpt(&self) -> bool {
        matches!(self, Model::Gpt4o)
    }

    /// Check if this is a Claude model
    pub fn is_claude(&self) -> bool {
        matches!(self, Model::Claude35Sonnet)
    }

    /// Check if this is a Gemini model
    pub fn is_gemini(&self) -> bool {
        matches!(self, Model::Gemini3Pro | Model::Gemini25Flash)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

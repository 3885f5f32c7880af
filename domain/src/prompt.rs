//! Prompt templates for the debate flow

use crate::ModelResponses;

/// Sampling temperature for the individual backend and simulation calls
pub const BACKEND_TEMPERATURE: f32 = 0.7;

/// Sampling temperature for the consensus call; lower than the backend
/// calls to favor coherence over variety
pub const CONSENSUS_TEMPERATURE: f32 = 0.4;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the consensus call
    pub fn consensus_system() -> &'static str {
        "You are an advanced synthesis engine. You create unified, high-quality answers \
         by merging multiple expert opinions."
    }

    /// User prompt for the consensus call
    ///
    /// Embeds the question and all three backend texts verbatim, labeled by
    /// perspective. The instructions ask for one new cohesive answer, not a
    /// concatenation, and forbid naming which source contributed what.
    pub fn consensus_prompt(question: &str, models: &ModelResponses) -> String {
        format!(
            r#"Act as the "Nexus Judge", an impartial super-intelligence.
Your task is to synthesize three distinct AI perspectives into one natural, "Golden Consensus" answer.

User Question: "{question}"

[Perspective A: OpenAI GPT-4o]
{openai}

[Perspective B: Anthropic Claude 3.5]
{claude}

[Perspective C: Google Gemini]
{gemini}

Synthesis Instructions:
1. Analyze the core arguments of each model.
2. Identify the most accurate and insightful points from each.
3. Construct a completely new, cohesive response that integrates the best of all three.
4. The tone should be authoritative yet accessible.
5. Use Markdown formatting (headers, bolding, bullet points) to make the final output visually engaging and easy to read.
6. Do not explicitly say "Model A said X", just weave the information together naturally."#,
            question = question,
            openai = models.openai,
            claude = models.claude,
            gemini = models.gemini,
        )
    }
}

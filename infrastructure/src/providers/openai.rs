//! OpenAI chat completions adapter

use debate_application::ports::backend_gateway::{CompletionRequest, GatewayError};
use serde::{Deserialize, Serialize};
use tracing::warn;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Issue one chat completion request and extract the first generated text
///
/// Returns an empty string when the response carries no usable text; the
/// caller decides how to placeholder that.
pub async fn complete(
    http: &reqwest::Client,
    api_key: &str,
    model: &str,
    request: &CompletionRequest,
) -> Result<String, GatewayError> {
    let mut messages = Vec::new();
    if let Some(system) = &request.system_instruction {
        messages.push(ChatMessage {
            role: "system",
            content: system,
        });
    }
    messages.push(ChatMessage {
        role: "user",
        content: &request.message,
    });

    let body = ChatRequest {
        model,
        messages,
        temperature: request.temperature,
    };

    let response = http
        .post(CHAT_COMPLETIONS_URL)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        warn!("OpenAI call failed ({})", status);
        let detail = response.text().await.unwrap_or_default();
        return Err(GatewayError::HttpStatus {
            status: status.as_u16(),
            detail,
        });
    }

    let parsed: ChatResponse = response
        .json()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    Ok(parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default())
}

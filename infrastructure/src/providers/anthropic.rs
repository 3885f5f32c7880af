//! Anthropic messages adapter

use debate_application::ports::backend_gateway::{CompletionRequest, GatewayError};
use serde::{Deserialize, Serialize};
use tracing::warn;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Issue one messages request and extract the first generated text
pub async fn complete(
    http: &reqwest::Client,
    api_key: &str,
    model: &str,
    request: &CompletionRequest,
) -> Result<String, GatewayError> {
    let body = MessagesRequest {
        model,
        max_tokens: MAX_TOKENS,
        system: request.system_instruction.as_deref(),
        messages: vec![Message {
            role: "user",
            content: &request.message,
        }],
        temperature: request.temperature,
    };

    let response = http
        .post(MESSAGES_URL)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&body)
        .send()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        warn!("Anthropic call failed ({})", status);
        let detail = response.text().await.unwrap_or_default();
        return Err(GatewayError::HttpStatus {
            status: status.as_u16(),
            detail,
        });
    }

    let parsed: MessagesResponse = response
        .json()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    Ok(parsed
        .content
        .into_iter()
        .find_map(|block| block.text)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_omits_absent_system() {
        let request = CompletionRequest::new("Q");
        let body = MessagesRequest {
            model: "claude-3-5-sonnet-20240620",
            max_tokens: MAX_TOKENS,
            system: request.system_instruction.as_deref(),
            messages: vec![Message {
                role: "user",
                content: &request.message,
            }],
            temperature: request.temperature,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("system").is_none());
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["content"], "Q");
    }

    #[test]
    fn test_response_first_text_extraction() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"Four."},{"type":"text","text":"More."}]}"#,
        )
        .unwrap();
        let text = parsed
            .content
            .into_iter()
            .find_map(|block| block.text)
            .unwrap_or_default();
        assert_eq!(text, "Four.");
    }

    #[test]
    fn test_response_without_text_yields_empty() {
        let parsed: MessagesResponse =
            serde_json::from_str(r#"{"content":[{"type":"tool_use"}]}"#).unwrap();
        let text = parsed
            .content
            .into_iter()
            .find_map(|block| block.text)
            .unwrap_or_default();
        assert!(text.is_empty());
    }
}

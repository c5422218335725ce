//! Gemini API client struct, request building, and response parsing.

use std::time::Duration;

use crate::{AiError, AiResponse, Message, Role, TokenUsage};

use super::config::{GeminiConfig, GEMINI_API_BASE};

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{GEMINI_API_BASE}/{}:generateContent", self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let contents: Vec<_> = messages
            .iter()
            .filter_map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                    Role::System => return None, // sent as systemInstruction
                };
                Some(serde_json::json!({
                    "role": role,
                    "parts": [{ "text": msg.content }]
                }))
            })
            .collect();

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if let Some(system) = messages.iter().find(|m| m.role == Role::System) {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system.content }]
            });
        }

        body
    }

    /// Parse a `generateContent` response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let first = json["candidates"].as_array().and_then(|c| c.first());

        let Some(first) = first else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                return Err(AiError::ApiError(format!("prompt blocked: {reason}")));
            }
            return Err(AiError::ParseError("no candidates in response".to_string()));
        };

        let content: String = first["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect()
            })
            .unwrap_or_default();

        if content.is_empty() {
            let reason = first["finishReason"].as_str().unwrap_or("UNKNOWN");
            return Err(AiError::ApiError(format!(
                "response contained no text (finish reason: {reason})"
            )));
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key").with_model("gemini-test")).unwrap()
    }

    #[test]
    fn api_url_names_model_and_method() {
        assert_eq!(
            client().api_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn api_url_never_contains_key() {
        assert!(!client().api_url().contains("test-key"));
    }

    #[test]
    fn request_body_carries_prompt_and_generation_config() {
        let body = client().build_request_body(&[Message::user("What is X?")]);
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "What is X?");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 4096);
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn system_message_becomes_system_instruction() {
        let messages = [
            Message {
                role: Role::System,
                content: "Be brief.".into(),
            },
            Message::user("hi"),
        ];
        let body = client().build_request_body(&messages);
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be brief.");
    }

    #[test]
    fn parse_joins_text_parts_and_usage() {
        let json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 7, "candidatesTokenCount": 3 }
        });
        let resp = client().parse_response(json).unwrap();
        assert_eq!(resp.content, "Hello, world");
        assert_eq!(resp.usage.total_tokens(), 10);
    }

    #[test]
    fn parse_blocked_prompt() {
        let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = client().parse_response(json).unwrap_err();
        assert_eq!(err, AiError::ApiError("prompt blocked: SAFETY".into()));
    }

    #[test]
    fn parse_missing_candidates() {
        let err = client().parse_response(serde_json::json!({})).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn parse_empty_candidate_reports_finish_reason() {
        let json = serde_json::json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "RECITATION" }]
        });
        let err = client().parse_response(json).unwrap_err();
        assert!(err.to_string().contains("RECITATION"));
    }
}

//! Inline assistant configuration types.

use serde::{Deserialize, Serialize};

/// Which text the assistant inspects when triggered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum TriggerScope {
    /// The whole buffer, trimmed.
    #[default]
    Buffer,
    /// Only the line under the text cursor.
    Line,
}

/// Inline assistant settings.
///
/// The API key itself is never stored here; `api_key_env` names the
/// environment variable to read it from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub enabled: bool,
    /// Gemini model id, e.g. `gemini-2.0-flash`.
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Maximum output tokens per response (valid range: 1-65536).
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Requests allowed in flight at once (valid range: 1-8).
    pub max_in_flight: u32,
    /// Per-request timeout in seconds (valid range: 5-600).
    pub request_timeout_secs: u32,
    pub trigger_scope: TriggerScope,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "gemini-2.0-flash".into(),
            api_key_env: "GEMINI_API_KEY".into(),
            max_tokens: 4096,
            temperature: 0.7,
            max_in_flight: 1,
            request_timeout_secs: 120,
            trigger_scope: TriggerScope::Buffer,
        }
    }
}

//! Gemini API client configuration.

use crate::AiError;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Fallback variable consulted when the configured one is unset.
const FALLBACK_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Value shipped in sample `.env` files; treated as unset.
const PLACEHOLDER_KEY: &str = "YOUR-API-KEY";

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.0-flash".to_string(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }

    /// Read the API key from `var`, falling back to `GOOGLE_API_KEY`.
    pub fn from_env(var: &str) -> Result<Self, AiError> {
        Self::from_lookup(var, |name| std::env::var(name).ok())
    }

    fn from_lookup(var: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AiError> {
        [var, FALLBACK_KEY_ENV]
            .into_iter()
            .filter_map(|name| lookup(name))
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty() && key != PLACEHOLDER_KEY)
            .map(Self::new)
            .ok_or_else(|| {
                AiError::NotConfigured(format!(
                    "{var} is not set. Export it or add it to a .env file."
                ))
            })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

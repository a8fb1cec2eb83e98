use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vars::Vars;

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_explanation_language() -> String {
    "spanish".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature, 0.0 to 2.0
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Remote call timeout, expiry counts as a transport failure
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Language of the translation and of the grammar explanations
    #[serde(default = "default_explanation_language")]
    pub explanation_language: String,
}

impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("explanation_language", &self.explanation_language)
            .finish()
    }
}

impl TranslatorConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: default_api_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            explanation_language: default_explanation_language(),
        }
    }

    pub(crate) fn from_vars<F>(vars: &Vars<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = vars.required("OPENAI_API_KEY")?;

        let max_tokens = vars.parse_or::<u32>("MAX_TOKENS", default_max_tokens())?;
        if max_tokens == 0 {
            return Err(ConfigError::invalid("MAX_TOKENS", "0", "must be positive"));
        }

        let temperature = vars.parse_or::<f32>("TEMPERATURE", default_temperature())?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::invalid(
                "TEMPERATURE",
                temperature.to_string(),
                "must be between 0 and 2",
            ));
        }

        let timeout_secs = vars.parse_or::<u64>("REQUEST_TIMEOUT_SECS", default_timeout_secs())?;
        if timeout_secs == 0 {
            return Err(ConfigError::invalid("REQUEST_TIMEOUT_SECS", "0", "must be positive"));
        }

        Ok(Self {
            api_key,
            api_url: vars.string_or("OPENAI_API_URL", &default_api_url()),
            model: vars.string_or("OPENAI_MODEL", &default_model()),
            max_tokens,
            temperature,
            timeout_secs,
            explanation_language: vars
                .string_or("EXPLANATION_LANGUAGE", &default_explanation_language()),
        })
    }
}

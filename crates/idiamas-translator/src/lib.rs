use std::time::Duration;

use idiamas_types::TranslationResult;

pub mod openai;
pub mod parse;
mod prompt;

pub use openai::OpenAiTranslator;
pub use parse::{ParseError, parse_translation_payload};

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` and explain its grammar word by word
    async fn translate(
        &self,
        text: &str,
        options: &TranslationOptions,
    ) -> Result<TranslationResult, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Per-request model settings
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOptions {
    pub model: String,
    pub max_tokens: u32,
    /// 0.0 to 2.0
    pub temperature: f32,
    /// OCR language code of the source text, e.g. `ita`
    pub source_language: String,
    /// Language the translation and explanations are written in
    pub explanation_language: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Malformed response: {0}")]
    Parse(#[from] ParseError),
}

impl TranslateError {
    /// Transport-level failures, timeouts included
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError(_) | Self::Timeout(_))
    }
}

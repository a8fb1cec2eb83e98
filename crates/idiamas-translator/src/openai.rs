use std::time::Duration;

use async_trait::async_trait;
use idiamas_types::TranslationResult;
use reqwest::StatusCode;
use serde_json::json;

use crate::parse::{completion_content, parse_translation_payload};
use crate::prompt::{system_prompt, user_prompt};
use crate::{ProviderMetadata, TranslateError, TranslationOptions, Translator};

/// Chat-completions client asking for a JSON translation payload
#[derive(Clone)]
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    timeout: Duration,
}

impl OpenAiTranslator {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TranslateError::NetworkError)?;

        Ok(Self {
            client,
            api_key,
            api_url,
            timeout,
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> TranslateError {
        if e.is_timeout() {
            TranslateError::Timeout(self.timeout)
        } else {
            TranslateError::NetworkError(e)
        }
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(
        &self,
        text: &str,
        options: &TranslationOptions,
    ) -> Result<TranslationResult, TranslateError> {
        if self.metadata().requires_api_key && self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let body = json!({
            "model": options.model,
            "messages": [
                { "role": "system", "content": system_prompt(options) },
                { "role": "user", "content": user_prompt(text) },
            ],
            "max_tokens": options.max_tokens,
            "temperature": options.temperature,
            "response_format": { "type": "json_object" },
        });

        tracing::debug!("Requesting translation from {} ({})", self.api_url, options.model);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let payload = response.text().await.map_err(|e| self.transport_error(e))?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslateError::RateLimitExceeded);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TranslateError::AuthenticationError);
        }

        if !status.is_success() {
            return Err(TranslateError::ApiError {
                status: status.as_u16(),
                message: api_error_message(&payload),
            });
        }

        let content = completion_content(&payload)?;
        let result = parse_translation_payload(&content, text)?;

        tracing::info!(
            "Translation received: {} chars, {} grammar entries",
            result.translated.chars().count(),
            result.grammar_entries.len()
        );

        Ok(result)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "OpenAI".to_string(),
            requires_api_key: true,
        }
    }
}

/// `error.message` from an OpenAI error body, else the raw body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

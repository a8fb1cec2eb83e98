use std::sync::Arc;
use std::time::Duration;

use idiamas_ocr::{Capture, CaptureError, RecognitionError, Recognizer, ScreenCapture, TesseractRecognizer};
use idiamas_translator::{OpenAiTranslator, TranslateError, TranslationOptions, Translator};
use idiamas_types::AppEvent;
use kanal::AsyncSender;

use crate::state::AppState;

/// Any failure of a translate cycle. Caught by the orchestrator and shown to
/// the user, never propagated further.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Recognition(#[from] RecognitionError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl PipelineError {
    /// Short label used as the error popup title
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Capture(_) => "Capture error",
            Self::Recognition(_) => "OCR error",
            Self::Translate(e) if e.is_transport() => "Network error",
            Self::Translate(TranslateError::Parse(_)) => "Invalid response",
            Self::Translate(_) => "Translation error",
            Self::Task(_) => "Internal error",
        }
    }
}

/// Everything a translate cycle needs, cloned into each spawned cycle
#[derive(Clone)]
pub struct PipelineContext {
    pub state: Arc<AppState>,
    pub event_tx: AsyncSender<AppEvent>,
    pub capture: Arc<dyn Capture>,
    pub recognizer: Arc<dyn Recognizer>,
    pub translator: Arc<dyn Translator>,
    pub options: TranslationOptions,
}

impl PipelineContext {
    pub fn new(
        state: Arc<AppState>,
        event_tx: AsyncSender<AppEvent>,
        capture: Arc<dyn Capture>,
        recognizer: Arc<dyn Recognizer>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let options = {
            let config = &state.config;
            TranslationOptions {
                model: config.translator.model.clone(),
                max_tokens: config.translator.max_tokens,
                temperature: config.translator.temperature,
                source_language: config.ocr.language.clone(),
                explanation_language: config.translator.explanation_language.clone(),
            }
        };

        Self {
            state,
            event_tx,
            capture,
            recognizer,
            translator,
            options,
        }
    }

    /// Screen capture, tesseract and the OpenAI-compatible endpoint
    pub fn production(state: Arc<AppState>, event_tx: AsyncSender<AppEvent>) -> anyhow::Result<Self> {
        let translator = {
            let config = &state.config.translator;
            OpenAiTranslator::new(
                config.api_key.clone(),
                config.api_url.clone(),
                Duration::from_secs(config.timeout_secs),
            )?
        };

        Ok(Self::new(
            state,
            event_tx,
            Arc::new(ScreenCapture),
            Arc::new(TesseractRecognizer::new()),
            Arc::new(translator),
        ))
    }

    pub async fn notify(&self, event: AppEvent) {
        if let Err(e) = self.event_tx.send(event).await {
            tracing::warn!("Failed to send event to UI: {}", e);
        }
    }

    pub async fn notify_status(&self, status: &str, busy: bool) {
        self.notify(AppEvent::StatusUpdate {
            status: status.to_string(),
            busy,
        })
        .await;
    }
}

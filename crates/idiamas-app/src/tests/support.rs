//! Test doubles for the pipeline seams

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use idiamas_config::Config;
use idiamas_ocr::{Capture, CaptureError, RecognitionError, Recognizer};
use idiamas_translator::{ProviderMetadata, TranslateError, TranslationOptions, Translator};
use idiamas_types::{AppEvent, CaptureRegion, GrammarEntry, OcrResult, TranslationResult};
use image::RgbaImage;
use kanal::AsyncReceiver;

use crate::pipeline::PipelineContext;
use crate::state::AppState;

pub fn test_config(region: &str) -> Config {
    test_config_with(region, &[])
}

/// Required keys plus `extra` overrides
pub fn test_config_with(region: &str, extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = extra
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    vars.insert("OPENAI_API_KEY".into(), "test-key".into());
    vars.insert("SUBTITLES_REGION".into(), region.into());
    Config::from_lookup(move |key| vars.get(key).cloned()).unwrap()
}

/// Returns a blank image of the region size; optionally blocks until released
pub struct MockCapture {
    pub calls: AtomicUsize,
    gate: Option<Mutex<Receiver<()>>>,
    fail: bool,
}

impl MockCapture {
    pub fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            gate: None,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }

    /// Each capture waits for one message on the returned sender
    pub fn gated() -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let capture = Self {
            gate: Some(Mutex::new(rx)),
            ..Self::ok()
        };
        (capture, tx)
    }
}

impl Capture for MockCapture {
    fn capture(&self, region: CaptureRegion) -> Result<RgbaImage, CaptureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv_timeout(Duration::from_secs(5));
        }
        if self.fail {
            return Err(CaptureError::OutOfBounds(region));
        }
        Ok(RgbaImage::new(region.width, region.height))
    }
}

pub struct MockRecognizer {
    pub text: String,
    pub calls: AtomicUsize,
}

impl MockRecognizer {
    pub fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl Recognizer for MockRecognizer {
    fn recognize(
        &self,
        image: &RgbaImage,
        language: &str,
        _threshold: u8,
    ) -> Result<OcrResult, RecognitionError> {
        assert!(image.width() > 0 && image.height() > 0);
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(OcrResult {
            text: self.text.clone(),
            language: language.to_string(),
        })
    }
}

type Respond = Box<dyn Fn(&str) -> Result<TranslationResult, TranslateError> + Send + Sync>;

pub struct MockTranslator {
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<String>>,
    respond: Respond,
}

impl MockTranslator {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str) -> Result<TranslationResult, TranslateError> + Send + Sync + 'static,
    {
        Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    /// "Hello world" with one grammar entry for "Ciao"
    pub fn hello_world() -> Self {
        Self::new(|text| {
            Ok(TranslationResult {
                original: text.to_string(),
                translated: "Hello world".to_string(),
                grammar_entries: vec![GrammarEntry::new("Ciao", "interjection", "hello")],
            })
        })
    }
}

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _options: &TranslationOptions,
    ) -> Result<TranslationResult, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(text.to_string());
        (self.respond)(text)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "mock".to_string(),
            requires_api_key: false,
        }
    }
}

pub struct Harness {
    pub ctx: PipelineContext,
    pub ui_rx: AsyncReceiver<AppEvent>,
    pub capture: Arc<MockCapture>,
    pub recognizer: Arc<MockRecognizer>,
    pub translator: Arc<MockTranslator>,
}

pub fn harness(capture: MockCapture, recognizer: MockRecognizer, translator: MockTranslator) -> Harness {
    harness_with_config(test_config("0,0,100,50"), capture, recognizer, translator)
}

pub fn harness_with_config(
    config: Config,
    capture: MockCapture,
    recognizer: MockRecognizer,
    translator: MockTranslator,
) -> Harness {
    let (ui_tx, ui_rx) = kanal::unbounded_async();
    let capture = Arc::new(capture);
    let recognizer = Arc::new(recognizer);
    let translator = Arc::new(translator);
    let state = Arc::new(AppState::new(config));

    let ctx = PipelineContext::new(
        state,
        ui_tx,
        capture.clone(),
        recognizer.clone(),
        translator.clone(),
    );

    Harness {
        ctx,
        ui_rx,
        capture,
        recognizer,
        translator,
    }
}

/// Everything currently queued for the UI
pub fn drain(rx: &AsyncReceiver<AppEvent>) -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Ok(Some(event)) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Poll `condition` until it holds or two seconds pass
pub async fn wait_until<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

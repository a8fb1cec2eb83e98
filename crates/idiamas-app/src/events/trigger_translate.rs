use std::path::Path;

use idiamas_core::BusyGuard;
use idiamas_types::{AppEvent, TranslationResult};

use crate::pipeline::{PipelineContext, PipelineError};
use crate::status::CycleOutcome;

enum Cycle {
    Translated(TranslationResult),
    NoText,
}

/// One capture → OCR → translate cycle. `_guard` keeps the gate Busy until
/// this returns, whatever the outcome.
pub async fn handle_translate_trigger(ctx: &PipelineContext, _guard: BusyGuard) {
    ctx.notify_status("Capturing…", true).await;

    let outcome = match run_cycle(ctx).await {
        Ok(Cycle::Translated(result)) => {
            tracing::info!(
                "Translation ready ({} chars, {} grammar entries)",
                result.translated.chars().count(),
                result.grammar_entries.len()
            );
            ctx.notify(AppEvent::ShowTranslation {
                result,
                from_lang: ctx.options.source_language.clone(),
                to_lang: ctx.options.explanation_language.clone(),
            })
            .await;
            CycleOutcome::Translated
        }
        Ok(Cycle::NoText) => {
            tracing::info!("No subtitle text recognized");
            ctx.notify_status("No subtitle found", false).await;
            CycleOutcome::NoText
        }
        Err(e) => {
            tracing::error!("Translate cycle failed: {}", e);
            ctx.notify(AppEvent::ShowError {
                kind: e.kind().to_string(),
                message: e.to_string(),
            })
            .await;
            ctx.notify_status("Ready", false).await;
            CycleOutcome::Failed
        }
    };

    ctx.state.status.record(outcome).await;
}

async fn run_cycle(ctx: &PipelineContext) -> Result<Cycle, PipelineError> {
    let config = ctx.state.config.clone();
    let capture = ctx.capture.clone();
    let recognizer = ctx.recognizer.clone();

    let ocr = tokio::task::spawn_blocking(move || {
        let region = config.ocr.capture_region;
        tracing::info!("Capturing region {}", region);
        let image = capture.capture(region)?;
        let ocr = recognizer.recognize(&image, &config.ocr.language, config.ocr.threshold)?;

        // Saved only when text was recognized
        if config.ocr.save_captures && !ocr.is_empty() {
            match idiamas_io::captures::save_capture(Path::new(&config.ocr.captures_dir), &image) {
                Ok(path) => tracing::debug!("Capture saved to {}", path.display()),
                Err(e) => tracing::warn!("Failed to save capture: {:#}", e),
            }
        }

        Ok::<_, PipelineError>(ocr)
    })
    .await??;

    tracing::info!("Recognized {} chars", ocr.text.chars().count());

    if ocr.is_empty() {
        return Ok(Cycle::NoText);
    }

    ctx.notify_status("Translating…", true).await;
    let result = ctx.translator.translate(&ocr.text, &ctx.options).await?;
    ctx.state.history.push(result.clone()).await;

    Ok(Cycle::Translated(result))
}

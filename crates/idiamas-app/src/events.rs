use std::sync::Arc;

use idiamas_types::AppEvent;
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::pipeline::PipelineContext;

pub mod trigger_translate;

use trigger_translate::handle_translate_trigger;

/// Backend loop: hotkey actions and UI notifications in, pipeline cycles out
pub async fn event_loop(
    ctx: Arc<PipelineContext>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    ctx.notify(AppEvent::BackendReady).await;

    tracing::info!("[EVENT_LOOP] Waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        match event {
            AppEvent::TriggerTranslate => match ctx.state.gate.try_begin() {
                Some(guard) => {
                    tracing::info!("Translate triggered");
                    let ctx = ctx.clone();
                    tokio::spawn(async move {
                        handle_translate_trigger(&ctx, guard).await;
                    });
                }
                None => {
                    tracing::info!("Translate trigger ignored, a cycle is already running");
                    ctx.state.status.record_ignored().await;
                }
            },
            AppEvent::Quit => {
                tracing::info!("Quit requested (busy: {})", ctx.state.gate.is_busy());
                ctx.notify(AppEvent::Quit).await;
                cancel.cancel();
                break;
            }
            AppEvent::PopupClosed => {
                tracing::debug!("Popup closed by user");
            }
            AppEvent::ShowTranslation { .. }
            | AppEvent::ShowError { .. }
            | AppEvent::StatusUpdate { .. }
            | AppEvent::BackendReady => {
                // UI-only events
            }
        }
    }

    Ok(())
}

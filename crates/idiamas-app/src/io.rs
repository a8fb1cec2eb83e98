use std::time::Duration;

use idiamas_ocr::{HotkeyIds, HotkeyListener};
use idiamas_types::{AppEvent, HotkeyAction};
use kanal::{AsyncSender, Sender};
use tokio_util::sync::CancellationToken;

/// How long a single wait for a hotkey event may block before the cancel
/// token is checked again
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Forwards hotkey presses to the event loop until cancelled
pub async fn hotkey_io(
    ids: HotkeyIds,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let tx = event_tx.to_sync();

    tokio::task::spawn_blocking(move || {
        let listener = HotkeyListener::new(ids);
        tracing::info!("Hotkey listener started");
        forward_actions(|timeout| listener.next_action(timeout), &tx, &cancel);
        tracing::info!("Hotkey listener stopping");
    })
    .await?;

    Ok(())
}

/// Blocking loop behind [`hotkey_io`]. Stops on cancel, on a closed channel,
/// or after forwarding `Quit`.
pub fn forward_actions<F>(mut next_action: F, tx: &Sender<AppEvent>, cancel: &CancellationToken)
where
    F: FnMut(Duration) -> Option<HotkeyAction>,
{
    while !cancel.is_cancelled() {
        let Some(action) = next_action(POLL_TIMEOUT) else {
            continue;
        };

        let event = match action {
            HotkeyAction::Translate => {
                tracing::debug!("Translate hotkey pressed");
                AppEvent::TriggerTranslate
            }
            HotkeyAction::Quit => {
                tracing::info!("Quit hotkey pressed");
                AppEvent::Quit
            }
        };

        if let Err(e) = tx.send(event) {
            tracing::warn!("Event loop gone, dropping hotkey event: {}", e);
            break;
        }
        if action == HotkeyAction::Quit {
            break;
        }
    }
}

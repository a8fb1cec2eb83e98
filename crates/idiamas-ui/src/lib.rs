use std::cell::RefCell;
use std::rc::Rc;

use idiamas_config::ui::UiConfig;
use idiamas_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use slint::ComponentHandle;

pub mod events;
pub mod fade;
pub mod popup;
pub mod state;
pub mod theme;

use events::{EventFlow, apply_layout, handle_event, to_palette};
use fade::{ThemeSource, ViewportMetrics};
use popup::TabKind;
use state::UiState;
use theme::SlintTheme;

slint::include_modules!();

/// Runs the popup on the calling thread until a `Quit` event arrives or the
/// backend channel closes. Must be called from the main thread.
pub fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
) -> anyhow::Result<()> {
    let popup = PopupWindow::new()?;
    let error = ErrorWindow::new()?;

    let theme = Rc::new(SlintTheme::new(popup.as_weak()));
    let state = Rc::new(RefCell::new(UiState::new(theme.as_ref(), config.fade_height)));
    popup.set_fade_palette(to_palette(&state.borrow().stops()));

    // Theme changes
    {
        let state = state.clone();
        let popup_weak = popup.as_weak();
        theme.on_theme_changed(Box::new(move |color| {
            let mut state = state.borrow_mut();
            state.set_background(color);
            if let Some(popup) = popup_weak.upgrade() {
                popup.set_fade_palette(to_palette(&state.stops()));
            }
        }));
    }
    {
        let theme = theme.clone();
        popup.on_theme_changed(move || theme.notify());
    }

    // Scroll and resize of the tab viewports
    {
        let state = state.clone();
        let popup_weak = popup.as_weak();
        popup.on_viewport_changed(move |index, scroll, width, height, content| {
            let Some(tab) = usize::try_from(index).ok().and_then(TabKind::from_index) else {
                return;
            };
            let metrics = ViewportMetrics {
                scroll_offset: scroll,
                visible_width: width,
                visible_height: height,
                content_height: content,
            };
            let geometry = state.borrow_mut().on_viewport_changed(tab, metrics);
            if let (Some(geometry), Some(popup)) = (geometry, popup_weak.upgrade()) {
                apply_layout(&popup, tab, geometry);
            }
        });
    }

    // Copy button and Ctrl+C
    {
        let state = state.clone();
        let popup_weak = popup.as_weak();
        popup.on_copy_requested(move |index| {
            let text = usize::try_from(index)
                .ok()
                .and_then(|index| state.borrow().copy_text(index));
            let Some(text) = text else {
                tracing::debug!("Nothing to copy for tab {}", index);
                return;
            };
            let status = match idiamas_io::clipboard::copy_text(&text) {
                Ok(()) => "Copied to clipboard".to_string(),
                Err(e) => {
                    tracing::warn!("Clipboard write failed: {:#}", e);
                    "Copy failed".to_string()
                }
            };
            if let Some(popup) = popup_weak.upgrade() {
                popup.set_status(status.into());
            }
        });
    }

    // Dragging by the header
    {
        let popup_weak = popup.as_weak();
        popup.on_drag_moved(move |dx, dy| {
            let Some(popup) = popup_weak.upgrade() else {
                return;
            };
            let window = popup.window();
            let scale = window.scale_factor();
            let position = window.position();
            window.set_position(slint::PhysicalPosition::new(
                position.x + (dx * scale).round() as i32,
                position.y + (dy * scale).round() as i32,
            ));
        });
    }

    // Close button and Esc
    {
        let popup_weak = popup.as_weak();
        let tx = ui_to_app_tx.clone();
        popup.on_close_requested(move || {
            if let Some(popup) = popup_weak.upgrade() {
                let _ = popup.hide();
            }
            let tx = tx.clone();
            if let Err(e) = slint::spawn_local(async move {
                let _ = tx.send(AppEvent::PopupClosed).await;
            }) {
                tracing::warn!("Failed to notify popup close: {}", e);
            }
        });
    }
    {
        let error_weak = error.as_weak();
        error.on_close_requested(move || {
            if let Some(error) = error_weak.upgrade() {
                let _ = error.hide();
            }
        });
    }

    // Events from the backend
    {
        let popup_weak = popup.as_weak();
        let error_weak = error.as_weak();
        let state = state.clone();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                let (Some(popup), Some(error)) = (popup_weak.upgrade(), error_weak.upgrade())
                else {
                    break;
                };
                if handle_event(event, &popup, &error, &state) == EventFlow::Quit {
                    return;
                }
            }
            tracing::debug!("[SLINT] Backend channel closed");
            slint::quit_event_loop().ok();
        })?;
    }

    tracing::info!("UI ready");
    slint::run_event_loop_until_quit()?;

    tracing::info!("UI event loop finished");
    Ok(())
}

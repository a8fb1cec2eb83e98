use std::cell::RefCell;
use std::rc::Rc;

use idiamas_types::AppEvent;
use slint::{ComponentHandle, ModelRc, VecModel};

use crate::fade::{GradientStop, OverlayGeometry};
use crate::popup::{GRAMMAR_FALLBACK, PopupModel, TabKind};
use crate::state::UiState;
use crate::theme::to_color;
use crate::{ErrorWindow, FadeLayout, FadePalette, GrammarCard, PopupWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Continue,
    Quit,
}

pub fn handle_event(
    event: AppEvent,
    popup: &PopupWindow,
    error: &ErrorWindow,
    state: &RefCell<UiState>,
) -> EventFlow {
    match event {
        AppEvent::ShowTranslation {
            result,
            from_lang,
            to_lang,
        } => {
            let model = PopupModel::from_result(&result, &from_lang, &to_lang);
            tracing::debug!(
                "[SLINT] Showing translation with {} grammar cards",
                model.grammar_cards().len()
            );
            apply_model(popup, &model);
            state.borrow_mut().model = Some(model);
            popup.set_status("Ready".into());
            popup.set_busy(false);
            if let Err(e) = popup.show() {
                tracing::error!("Failed to show popup: {}", e);
            }
        }
        AppEvent::ShowError { kind, message } => {
            tracing::debug!("[SLINT] Showing error: {}", kind);
            error.set_kind(kind.into());
            error.set_message(message.into());
            popup.set_busy(false);
            if let Err(e) = error.show() {
                tracing::error!("Failed to show error popup: {}", e);
            }
        }
        AppEvent::StatusUpdate { status, busy } => {
            popup.set_status(status.into());
            popup.set_busy(busy);
        }
        AppEvent::BackendReady => {
            popup.set_status("Ready".into());
            popup.set_busy(false);
        }
        AppEvent::Quit => {
            tracing::info!("[SLINT] Quit received, leaving event loop");
            let _ = popup.hide();
            let _ = error.hide();
            slint::quit_event_loop().ok();
            return EventFlow::Quit;
        }
        AppEvent::TriggerTranslate | AppEvent::PopupClosed => {
            // Backend-only events
        }
    }
    EventFlow::Continue
}

fn apply_model(popup: &PopupWindow, model: &PopupModel) {
    popup.set_original_title(model.tab(TabKind::Original).title.as_str().into());
    popup.set_translation_title(model.tab(TabKind::Translation).title.as_str().into());
    popup.set_grammar_title(model.tab(TabKind::Grammar).title.as_str().into());
    popup.set_original_text(model.tab(TabKind::Original).text.as_str().into());
    popup.set_translation_text(model.tab(TabKind::Translation).text.as_str().into());
    popup.set_grammar_fallback(GRAMMAR_FALLBACK.into());

    let cards: Vec<GrammarCard> = model
        .grammar_cards()
        .iter()
        .map(|entry| GrammarCard {
            word: entry.word.as_str().into(),
            role: if entry.function.is_empty() {
                Default::default()
            } else {
                format!("({})", entry.function).into()
            },
            explanation: entry.explanation.as_str().into(),
        })
        .collect();
    popup.set_grammar_cards(ModelRc::from(Rc::new(VecModel::from(cards))));
    popup.set_current_tab(TabKind::Translation.index() as i32);
}

pub fn to_palette(stops: &[GradientStop; 4]) -> FadePalette {
    FadePalette {
        c0: to_color(stops[0].color),
        c30: to_color(stops[1].color),
        c70: to_color(stops[2].color),
        c100: to_color(stops[3].color),
    }
}

pub fn to_layout(geometry: OverlayGeometry) -> FadeLayout {
    FadeLayout {
        x: geometry.x,
        y: geometry.y,
        width: geometry.width,
        height: geometry.height,
        visible: geometry.visible,
        top_visible: geometry.top_visible,
    }
}

pub fn apply_layout(popup: &PopupWindow, tab: TabKind, geometry: OverlayGeometry) {
    let layout = to_layout(geometry);
    match tab {
        TabKind::Original => popup.set_original_fade(layout),
        TabKind::Translation => popup.set_translation_fade(layout),
        TabKind::Grammar => popup.set_grammar_fade(layout),
    }
}

use std::sync::Arc;

use idiamas_ocr::HotkeyIds;
use idiamas_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::hotkey_io;
use crate::pipeline::PipelineContext;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            // Hotkey presses and UI notifications
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Sender the pipeline uses to reach the UI
    pub fn app_to_ui_tx(&self) -> AsyncSender<AppEvent> {
        self.channels.app_to_ui.0.clone()
    }

    /// Channel ends owned by the UI thread
    pub fn ui_endpoints(&self) -> (AsyncReceiver<AppEvent>, AsyncSender<AppEvent>) {
        (
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
        )
    }

    /// Must be called inside a tokio runtime context
    pub fn spawn_tasks(&self, ctx: PipelineContext, hotkeys: HotkeyIds) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            Arc::new(ctx),
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.clone(),
        ));

        tasks.spawn(hotkey_io(
            hotkeys,
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

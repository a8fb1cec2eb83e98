use idiamas_config::ui::UiConfig;
use idiamas_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};

/// Blocks the calling (main) thread until the UI quits
pub fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
) -> anyhow::Result<()> {
    idiamas_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, config)
}

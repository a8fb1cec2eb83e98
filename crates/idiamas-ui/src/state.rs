use crate::fade::{FadeOverlay, GradientStop, OverlayGeometry, Rgba8, ThemeSource, ViewportMetrics};
use crate::popup::{PopupModel, TabKind};

/// UI-thread state of the popup, separate from the backend's AppState
pub struct UiState {
    pub model: Option<PopupModel>,
    fades: [FadeOverlay; 3],
}

impl UiState {
    pub fn new(theme: &dyn ThemeSource, fade_height: f32) -> Self {
        Self::with_background(theme.background_color(), fade_height)
    }

    pub fn with_background(background: Rgba8, fade_height: f32) -> Self {
        Self {
            model: None,
            fades: std::array::from_fn(|_| FadeOverlay::with_background(background, fade_height)),
        }
    }

    pub fn set_background(&mut self, color: Rgba8) {
        for fade in &mut self.fades {
            fade.set_background(color);
        }
    }

    /// Gradient stops shared by every tab
    pub fn stops(&self) -> [GradientStop; 4] {
        self.fades[0].stops()
    }

    pub fn on_viewport_changed(
        &mut self,
        tab: TabKind,
        metrics: ViewportMetrics,
    ) -> Option<OverlayGeometry> {
        self.fades[tab.index()].on_viewport_changed(metrics)
    }

    pub fn copy_text(&self, index: usize) -> Option<String> {
        self.model
            .as_ref()
            .and_then(|model| model.copy_text(index))
            .map(str::to_string)
    }
}

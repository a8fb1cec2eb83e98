//! Fade overlay geometry and gradient math.
//!
//! The overlay sits on top of a scroll viewport and paints the theme
//! background with increasing opacity towards the viewport's bottom edge, so
//! content scrolling underneath fades out before it reaches the edge. Nothing
//! here touches the toolkit; the slint side only receives the numbers.

/// Gradient stops as (fraction of overlay height, opacity)
pub const FADE_STOPS: [(f32, f32); 4] = [(0.0, 0.0), (0.3, 0.3), (0.7, 0.8), (1.0, 1.0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

/// Host palette access, so the overlay can be driven without a display
pub trait ThemeSource {
    fn background_color(&self) -> Rgba8;

    /// `callback` receives the new background color after every theme change
    fn on_theme_changed(&self, callback: Box<dyn Fn(Rgba8)>);
}

/// Opacity at `fraction` of the overlay height, linear between stops
pub fn opacity_at(fraction: f32) -> f32 {
    let f = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };

    for pair in FADE_STOPS.windows(2) {
        let (f0, o0) = pair[0];
        let (f1, o1) = pair[1];
        if f <= f1 {
            let t = (f - f0) / (f1 - f0);
            return o0 + (o1 - o0) * t;
        }
    }
    FADE_STOPS[FADE_STOPS.len() - 1].1
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f32,
    pub color: Rgba8,
}

/// Snapshot of a scroll viewport, all values in logical px
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Distance scrolled from the top, never negative
    pub scroll_offset: f32,
    pub visible_width: f32,
    pub visible_height: f32,
    pub content_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Bottom fade, shown while content overflows the viewport
    pub visible: bool,
    /// Mirrored top fade, shown once scrolled away from the top
    pub top_visible: bool,
}

impl OverlayGeometry {
    pub fn compute(metrics: &ViewportMetrics, fade_height: f32) -> Self {
        let visible_height = metrics.visible_height.max(0.0);
        let height = fade_height.max(0.0).min(visible_height);

        Self {
            x: 0.0,
            y: visible_height - height,
            width: metrics.visible_width.max(0.0),
            height,
            visible: height > 0.0 && metrics.content_height > visible_height,
            top_visible: height > 0.0 && metrics.scroll_offset > 0.0,
        }
    }
}

/// Overlay state for one scrollable tab
#[derive(Debug, Clone)]
pub struct FadeOverlay {
    fade_height: f32,
    background: Rgba8,
    metrics: Option<ViewportMetrics>,
    geometry: OverlayGeometry,
}

impl FadeOverlay {
    /// Reads the theme background once
    pub fn new(theme: &dyn ThemeSource, fade_height: f32) -> Self {
        Self::with_background(theme.background_color(), fade_height)
    }

    pub fn with_background(background: Rgba8, fade_height: f32) -> Self {
        Self {
            fade_height,
            background,
            metrics: None,
            geometry: OverlayGeometry::default(),
        }
    }

    /// Scroll or resize notification. Returns the new geometry when it needs a
    /// repaint, `None` when nothing changed.
    pub fn on_viewport_changed(&mut self, metrics: ViewportMetrics) -> Option<OverlayGeometry> {
        if self.metrics == Some(metrics) {
            return None;
        }
        self.metrics = Some(metrics);

        let geometry = OverlayGeometry::compute(&metrics, self.fade_height);
        if geometry == self.geometry {
            return None;
        }
        self.geometry = geometry;
        Some(geometry)
    }

    pub fn set_background(&mut self, color: Rgba8) {
        self.background = color;
    }

    pub fn background(&self) -> Rgba8 {
        self.background
    }

    pub fn geometry(&self) -> OverlayGeometry {
        self.geometry
    }

    /// The four gradient stops, top (transparent) to bottom (opaque)
    pub fn stops(&self) -> [GradientStop; 4] {
        FADE_STOPS.map(|(position, opacity)| GradientStop {
            position,
            color: self.background.with_opacity(opacity),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    const DARK: Rgba8 = Rgba8::rgb(26, 26, 46);

    struct FixedTheme {
        color: RefCell<Rgba8>,
        listeners: RefCell<Vec<Box<dyn Fn(Rgba8)>>>,
    }

    impl FixedTheme {
        fn new(color: Rgba8) -> Self {
            Self {
                color: RefCell::new(color),
                listeners: RefCell::new(Vec::new()),
            }
        }

        fn switch_to(&self, color: Rgba8) {
            *self.color.borrow_mut() = color;
            for listener in self.listeners.borrow().iter() {
                listener(color);
            }
        }
    }

    impl ThemeSource for FixedTheme {
        fn background_color(&self) -> Rgba8 {
            *self.color.borrow()
        }

        fn on_theme_changed(&self, callback: Box<dyn Fn(Rgba8)>) {
            self.listeners.borrow_mut().push(callback);
        }
    }

    fn metrics(scroll: f32, visible: f32, content: f32) -> ViewportMetrics {
        ViewportMetrics {
            scroll_offset: scroll,
            visible_width: 800.0,
            visible_height: visible,
            content_height: content,
        }
    }

    #[test]
    fn opacity_hits_documented_stops() {
        assert_eq!(opacity_at(0.0), 0.0);
        assert!((opacity_at(0.3) - 0.3).abs() < 1e-6);
        assert!((opacity_at(0.7) - 0.8).abs() < 1e-6);
        assert_eq!(opacity_at(1.0), 1.0);
    }

    #[test]
    fn opacity_is_monotonic_and_clamped() {
        let mut last = opacity_at(0.0);
        for i in 1..=1000 {
            let value = opacity_at(i as f32 / 1000.0);
            assert!(value >= last, "opacity decreased at {i}");
            last = value;
        }
        assert_eq!(opacity_at(-1.0), 0.0);
        assert_eq!(opacity_at(3.0), 1.0);
        assert_eq!(opacity_at(f32::NAN), 0.0);
        assert!((opacity_at(0.5) - 0.55).abs() < 1e-6);
    }

    #[test]
    fn stops_use_theme_background() {
        let theme = FixedTheme::new(DARK);
        let overlay = FadeOverlay::new(&theme, 64.0);
        let stops = overlay.stops();

        let alphas: Vec<u8> = stops.iter().map(|s| s.color.a).collect();
        assert_eq!(alphas, vec![0, 77, 204, 255]);
        assert!(stops.iter().all(|s| (s.color.r, s.color.g, s.color.b) == (26, 26, 46)));
        assert_eq!(stops[2].position, 0.7);
    }

    #[test]
    fn geometry_clips_to_bottom_edge() {
        let geometry = OverlayGeometry::compute(&metrics(0.0, 400.0, 1200.0), 64.0);
        assert_eq!(geometry.y, 336.0);
        assert_eq!(geometry.height, 64.0);
        assert_eq!(geometry.width, 800.0);
        assert!(geometry.visible);
        assert!(!geometry.top_visible);

        // Viewport shorter than the fade height
        let geometry = OverlayGeometry::compute(&metrics(0.0, 40.0, 1200.0), 64.0);
        assert_eq!(geometry.y, 0.0);
        assert_eq!(geometry.height, 40.0);
    }

    #[test]
    fn fade_hidden_when_content_fits() {
        let geometry = OverlayGeometry::compute(&metrics(0.0, 400.0, 300.0), 64.0);
        assert!(!geometry.visible);
        assert!(!geometry.top_visible);
    }

    #[test]
    fn repaints_only_on_change() {
        let mut overlay = FadeOverlay::with_background(DARK, 64.0);

        let first = overlay.on_viewport_changed(metrics(0.0, 400.0, 1200.0));
        assert!(first.is_some());

        // Same metrics again: nothing to repaint
        assert!(overlay.on_viewport_changed(metrics(0.0, 400.0, 1200.0)).is_none());

        // Scrolling reveals the top fade
        let scrolled = overlay.on_viewport_changed(metrics(120.0, 400.0, 1200.0)).unwrap();
        assert!(scrolled.top_visible);

        // Further scrolling keeps the same geometry
        assert!(overlay.on_viewport_changed(metrics(240.0, 400.0, 1200.0)).is_none());

        // Resize moves the overlay
        let resized = overlay.on_viewport_changed(metrics(240.0, 500.0, 1200.0)).unwrap();
        assert_eq!(resized.y, 436.0);
        assert_eq!(overlay.geometry(), resized);
    }

    #[test]
    fn theme_change_updates_colors() {
        let theme = FixedTheme::new(DARK);
        let overlay = Rc::new(RefCell::new(FadeOverlay::new(&theme, 64.0)));

        let target = overlay.clone();
        theme.on_theme_changed(Box::new(move |color| target.borrow_mut().set_background(color)));

        let light = Rgba8::rgb(248, 249, 250);
        theme.switch_to(light);

        let stops = overlay.borrow().stops();
        assert_eq!(stops[3].color, light);
        assert_eq!(stops[0].color, light.with_opacity(0.0));
    }
}

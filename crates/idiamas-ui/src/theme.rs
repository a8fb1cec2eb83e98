use std::cell::RefCell;

use slint::{Color, Weak};

use crate::PopupWindow;
use crate::fade::{Rgba8, ThemeSource};

pub fn to_rgba(color: Color) -> Rgba8 {
    Rgba8 {
        r: color.red(),
        g: color.green(),
        b: color.blue(),
        a: color.alpha(),
    }
}

pub fn to_color(color: Rgba8) -> Color {
    Color::from_argb_u8(color.a, color.r, color.g, color.b)
}

/// Theme background read from the popup's active palette
pub struct SlintTheme {
    window: Weak<PopupWindow>,
    fallback: Rgba8,
    listeners: RefCell<Vec<Box<dyn Fn(Rgba8)>>>,
}

impl SlintTheme {
    pub fn new(window: Weak<PopupWindow>) -> Self {
        Self {
            window,
            fallback: Rgba8::rgb(0x1e, 0x1e, 0x1e),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Called from the popup when the palette background changes
    pub fn notify(&self) {
        let color = self.background_color();
        tracing::debug!(?color, "Theme background changed");
        for listener in self.listeners.borrow().iter() {
            listener(color);
        }
    }
}

impl ThemeSource for SlintTheme {
    fn background_color(&self) -> Rgba8 {
        self.window
            .upgrade()
            .map(|window| to_rgba(window.get_theme_background()))
            .unwrap_or(self.fallback)
    }

    fn on_theme_changed(&self, callback: Box<dyn Fn(Rgba8)>) {
        self.listeners.borrow_mut().push(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_conversion_keeps_channels() {
        let rgba = Rgba8 {
            r: 10,
            g: 20,
            b: 30,
            a: 77,
        };
        assert_eq!(to_rgba(to_color(rgba)), rgba);
    }
}

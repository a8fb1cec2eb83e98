mod binarize;
mod capture;
mod hotkey;
mod ocr;
mod temp_image;

pub use binarize::binarize;
pub use capture::{
    Capture, CaptureError, MonitorInfo, ScreenCapture, crop_region, list_monitors, validate_region,
};
pub use hotkey::{HotkeyBackend, HotkeyBindings, HotkeyError, HotkeyIds, HotkeyListener};
pub use ocr::{RecognitionError, Recognizer, TesseractRecognizer};
pub use temp_image::TempImage;

use idiamas_core::{DefaultPreprocessor, Preprocessor};
use idiamas_types::OcrResult;
use image::RgbaImage;
use rusty_tesseract::Args;

use crate::binarize::binarize;
use crate::temp_image::TempImage;

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("OCR engine failed: {0}")]
    Engine(String),

    #[error("Failed to prepare image for OCR: {0}")]
    Image(#[from] image::ImageError),
}

/// Text extraction seam
///
/// Empty text means no subtitle was on screen, which is not an error.
pub trait Recognizer: Send + Sync {
    fn recognize(
        &self,
        image: &RgbaImage,
        language: &str,
        threshold: u8,
    ) -> Result<OcrResult, RecognitionError>;
}

/// Tesseract adapter, runs the `tesseract` executable
pub struct TesseractRecognizer {
    /// Page segmentation mode, 6 = single uniform block of text
    psm: i32,
    dpi: i32,
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self { psm: 6, dpi: 150 }
    }
}

impl TesseractRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when tesseract is not installed or not on PATH
    pub fn probe() -> Result<String, RecognitionError> {
        rusty_tesseract::get_tesseract_version()
            .map(|v| v.lines().next().unwrap_or_default().to_string())
            .map_err(|e| RecognitionError::EngineUnavailable(e.to_string()))
    }

    /// Installed language packs
    pub fn languages() -> Result<Vec<String>, RecognitionError> {
        rusty_tesseract::get_tesseract_langs()
            .map_err(|e| RecognitionError::EngineUnavailable(e.to_string()))
    }

    fn args(&self, language: &str) -> Args {
        Args {
            lang: language.to_string(),
            psm: Some(self.psm),
            dpi: Some(self.dpi),
            ..Args::default()
        }
    }
}

impl Recognizer for TesseractRecognizer {
    fn recognize(
        &self,
        image: &RgbaImage,
        language: &str,
        threshold: u8,
    ) -> Result<OcrResult, RecognitionError> {
        let binary = binarize(image, threshold);
        let temp = TempImage::write(&binary)?;

        let input = rusty_tesseract::Image::from_path(temp.path().to_path_buf())
            .map_err(|e| RecognitionError::Engine(e.to_string()))?;

        let raw = rusty_tesseract::image_to_string(&input, &self.args(language))
            .map_err(|e| RecognitionError::Engine(e.to_string()))?;

        let text = DefaultPreprocessor.process(&raw);
        if text.is_empty() {
            tracing::info!("No text detected in capture");
        } else {
            tracing::info!("Text extracted: {} chars", text.chars().count());
        }

        Ok(OcrResult {
            text,
            language: language.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_carry_language_and_layout() {
        let args = TesseractRecognizer::new().args("ita");
        assert_eq!(args.lang, "ita");
        assert_eq!(args.psm, Some(6));
        assert_eq!(args.dpi, Some(150));
    }
}

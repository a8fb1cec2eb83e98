use idiamas_types::CaptureRegion;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vars::Vars;

fn default_language() -> String {
    "ita".to_string()
}

fn default_threshold() -> u8 {
    200
}

fn default_captures_dir() -> String {
    "capturas_subtitulos".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OcrConfig {
    /// Region sampled on every translate trigger
    pub capture_region: CaptureRegion,
    /// Tesseract language code for the subtitle text
    #[serde(default = "default_language")]
    pub language: String,
    /// Binarization cutoff, pixels below it become black
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// Keep a PNG of every capture for later inspection
    #[serde(default)]
    pub save_captures: bool,
    #[serde(default = "default_captures_dir")]
    pub captures_dir: String,
}

impl OcrConfig {
    pub fn new(capture_region: CaptureRegion) -> Self {
        Self {
            capture_region,
            language: default_language(),
            threshold: default_threshold(),
            save_captures: false,
            captures_dir: default_captures_dir(),
        }
    }

    pub(crate) fn from_vars<F>(vars: &Vars<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_region = vars.required("SUBTITLES_REGION")?;
        let capture_region = parse_region(&raw_region)?;

        let threshold = vars.parse_or::<u8>("IMAGE_THRESHOLD", default_threshold())?;

        Ok(Self {
            capture_region,
            language: vars.string_or("OCR_LANGUAGE", &default_language()),
            threshold,
            save_captures: vars.bool_or("SAVE_CAPTURES", false)?,
            captures_dir: vars.string_or("CAPTURES_DIR", &default_captures_dir()),
        })
    }
}

/// Parse `x,y,width,height`
pub fn parse_region(raw: &str) -> Result<CaptureRegion, ConfigError> {
    const KEY: &str = "SUBTITLES_REGION";

    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(ConfigError::invalid(
            KEY,
            raw,
            "expected four comma-separated integers x,y,width,height",
        ));
    }

    let mut values = [0i64; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| ConfigError::invalid(KEY, raw, format!("'{part}' is not an integer")))?;
        if *slot < 0 {
            return Err(ConfigError::invalid(KEY, raw, "values must be non-negative"));
        }
    }

    let [x, y, width, height] = values;
    if width == 0 || height == 0 {
        return Err(ConfigError::invalid(KEY, raw, "width and height must be positive"));
    }

    let x = i32::try_from(x).map_err(|_| ConfigError::invalid(KEY, raw, "x out of range"))?;
    let y = i32::try_from(y).map_err(|_| ConfigError::invalid(KEY, raw, "y out of range"))?;
    let width =
        u32::try_from(width).map_err(|_| ConfigError::invalid(KEY, raw, "width out of range"))?;
    let height =
        u32::try_from(height).map_err(|_| ConfigError::invalid(KEY, raw, "height out of range"))?;

    Ok(CaptureRegion::new(x, y, width, height))
}

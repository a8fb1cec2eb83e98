use anyhow::{Context, Result};
use idiamas_types::CaptureRegion;
use image::{RgbaImage, imageops};
use xcap::Monitor;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Region {0} is not fully inside a monitor")]
    OutOfBounds(CaptureRegion),

    #[error("Screen capture failed: {0}")]
    Platform(String),

    #[error("Captured {actual:?}, expected {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Screen grabbing seam, implemented by [`ScreenCapture`] and by test doubles
pub trait Capture: Send + Sync {
    /// Returns an image of exactly `region.width` x `region.height`
    fn capture(&self, region: CaptureRegion) -> Result<RgbaImage, CaptureError>;
}

#[derive(Debug, Clone)]
pub struct MonitorInfo {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub is_primary: bool,
}

impl MonitorInfo {
    pub fn contains(&self, region: &CaptureRegion) -> bool {
        region.is_within(self.x, self.y, self.width, self.height)
    }
}

/// List monitors with their geometry in virtual desktop coordinates
pub fn list_monitors() -> Result<Vec<MonitorInfo>> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    Ok(monitors.iter().map(monitor_info).collect())
}

fn monitor_info(m: &Monitor) -> MonitorInfo {
    MonitorInfo {
        name: m.name().to_string(),
        x: m.x(),
        y: m.y(),
        width: m.width(),
        height: m.height(),
        is_primary: m.is_primary(),
    }
}

/// Check at startup that some monitor holds the whole region
pub fn validate_region(region: CaptureRegion) -> Result<MonitorInfo, CaptureError> {
    let monitors = list_monitors().map_err(|e| CaptureError::Platform(format!("{e:#}")))?;
    monitors
        .into_iter()
        .find(|m| m.contains(&region))
        .ok_or(CaptureError::OutOfBounds(region))
}

/// Captures through xcap: grab the monitor holding the region, then crop
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenCapture;

impl Capture for ScreenCapture {
    fn capture(&self, region: CaptureRegion) -> Result<RgbaImage, CaptureError> {
        let monitors = Monitor::all().map_err(|e| CaptureError::Platform(e.to_string()))?;

        let monitor = monitors
            .iter()
            .find(|m| monitor_info(m).contains(&region))
            .ok_or(CaptureError::OutOfBounds(region))?;

        tracing::debug!(
            "Capturing {} from monitor '{}' at ({}, {})",
            region,
            monitor.name(),
            monitor.x(),
            monitor.y()
        );

        let image = monitor
            .capture_image()
            .map_err(|e| CaptureError::Platform(e.to_string()))?;

        crop_region(&image, (monitor.x(), monitor.y()), region)
    }
}

/// Crop a monitor screenshot whose top-left corner sits at `origin`
pub fn crop_region(
    image: &RgbaImage,
    origin: (i32, i32),
    region: CaptureRegion,
) -> Result<RgbaImage, CaptureError> {
    let left = region.x as i64 - origin.0 as i64;
    let top = region.y as i64 - origin.1 as i64;

    if left < 0
        || top < 0
        || left + region.width as i64 > image.width() as i64
        || top + region.height as i64 > image.height() as i64
    {
        return Err(CaptureError::OutOfBounds(region));
    }

    let cropped =
        imageops::crop_imm(image, left as u32, top as u32, region.width, region.height).to_image();

    if cropped.dimensions() != (region.width, region.height) {
        return Err(CaptureError::DimensionMismatch {
            expected: (region.width, region.height),
            actual: cropped.dimensions(),
        });
    }

    Ok(cropped)
}

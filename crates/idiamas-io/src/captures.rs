use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use image::RgbaImage;

/// Save a capture as `sub_<unix millis>.png` inside `dir`, creating it if needed
pub fn save_capture(dir: &Path, image: &RgbaImage) -> Result<PathBuf, anyhow::Error> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    let mut path = dir.join(format!("sub_{millis}.png"));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("sub_{millis}_{n}.png"));
        n += 1;
    }

    image
        .save(&path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    tracing::debug!("Capture saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn saves_png_in_new_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("capturas_subtitulos");
        let image = RgbaImage::from_pixel(10, 5, Rgba([0, 0, 0, 255]));

        let first = save_capture(&dir, &image).unwrap();
        let second = save_capture(&dir, &image).unwrap();

        assert!(first.exists());
        assert_ne!(first, second);
        assert_eq!(image::open(&first).unwrap().to_rgba8().dimensions(), (10, 5));
    }
}

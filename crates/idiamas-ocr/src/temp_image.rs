use std::path::{Path, PathBuf};

use image::GrayImage;

/// RAII guard for an image written to the temp directory
///
/// Tesseract reads its input from disk. The file is removed when the guard
/// is dropped, including on early return.
pub struct TempImage {
    path: PathBuf,
}

impl TempImage {
    pub fn write(image: &GrayImage) -> Result<Self, image::ImageError> {
        Self::write_in(&std::env::temp_dir(), image)
    }

    pub fn write_in(dir: &Path, image: &GrayImage) -> Result<Self, image::ImageError> {
        let path = dir.join(format!("idiamas-{}.png", uuid::Uuid::new_v4()));
        image.save(&path)?;
        Ok(TempImage { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempImage {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!("Failed to remove {}: {}", self.path.display(), e);
        }
    }
}

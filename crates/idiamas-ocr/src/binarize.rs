use image::{GrayImage, Luma, RgbaImage, imageops};

/// Grayscale then threshold: pixels below `threshold` turn black, the rest white
pub fn binarize(image: &RgbaImage, threshold: u8) -> GrayImage {
    let mut gray = imageops::grayscale(image);
    for pixel in gray.pixels_mut() {
        let Luma([value]) = *pixel;
        *pixel = Luma([if value < threshold { 0 } else { 255 }]);
    }
    gray
}

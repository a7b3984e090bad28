//! Image preprocessing shared by the real model backends.

use image::imageops::FilterType;
use image::DynamicImage;
use ndarray::Array4;

/// Model input edge length.
pub const INPUT_SIZE: u32 = 224;

/// Convert a decoded image into a (1, 3, 224, 224) NCHW tensor.
///
/// Matches the training-time pipeline: RGB, exact 224x224 resize, scaled to
/// [0, 1]. No per-channel normalization.
pub fn to_input_tensor(image: &DynamicImage) -> Array4<f32> {
    let rgb = image
        .resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Triangle)
        .to_rgb8();

    let size = INPUT_SIZE as usize;
    let mut tensor = Array4::zeros((1, 3, size, size));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, c, y as usize, x as usize]] = f32::from(pixel[c]) / 255.0;
        }
    }
    tensor
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_tensor_shape() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(64, 48));
        let tensor = to_input_tensor(&image);
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
    }

    #[test]
    fn test_values_scaled_to_unit_range() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([255, 128, 0])));
        let tensor = to_input_tensor(&image);

        assert!((tensor[[0, 0, 100, 100]] - 1.0).abs() < 1e-6);
        assert!((tensor[[0, 1, 100, 100]] - 128.0 / 255.0).abs() < 1e-2);
        assert!(tensor[[0, 2, 100, 100]].abs() < 1e-6);
    }
}

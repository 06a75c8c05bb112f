//! Circular button faces cut from the uploaded image

use crate::io::error::{Result, invalid_parameter};
use crate::render::circle::apply_circle_mask;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

/// Fit the image to a square of `diameter` pixels and cut out the circle
///
/// The image is scaled until it covers the square, keeping its aspect ratio,
/// and the overflow is cropped evenly from both sides. Pixels outside the
/// inscribed circle are left transparent.
///
/// # Errors
///
/// Returns an error if `diameter` is zero
pub fn button_face(image: &DynamicImage, diameter: u32) -> Result<RgbaImage> {
    if diameter == 0 {
        return Err(invalid_parameter(
            "diameter",
            &diameter,
            &"button face needs at least one pixel",
        ));
    }

    let mut face = image
        .resize_to_fill(diameter, diameter, FilterType::Lanczos3)
        .to_rgba8();
    apply_circle_mask(&mut face);

    Ok(face)
}

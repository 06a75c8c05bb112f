//! Rasterization of circular masks and guide rings

use image::{Rgba, RgbaImage};
use std::f64::consts::TAU;

/// How a ring is stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    /// Continuous line
    Solid,
    /// Alternating dashes and gaps of equal arc length
    Dashed {
        /// Arc length of each dash in pixels
        dash_px: f64,
    },
}

/// A circular outline drawn inside its outer radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Horizontal center in page coordinates
    pub center_x: f64,
    /// Vertical center in page coordinates
    pub center_y: f64,
    /// Outer edge of the stroke
    pub radius: f64,
    /// Stroke width, measured inward from `radius`
    pub width: f64,
}

impl Ring {
    /// Whether the pixel whose center is at (`x`, `y`) lies on the ring
    pub fn covers(&self, x: f64, y: f64, stroke: Stroke) -> bool {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let distance = dx.hypot(dy);

        if distance < self.radius - self.width || distance >= self.radius {
            return false;
        }

        match stroke {
            Stroke::Solid => true,
            Stroke::Dashed { dash_px } => {
                if dash_px <= 0.0 {
                    return true;
                }
                let angle = dy.atan2(dx).rem_euclid(TAU);
                let arc = angle * (self.radius - self.width / 2.0);
                ((arc / dash_px).floor() as u64) % 2 == 0
            }
        }
    }
}

/// Draw a ring onto the canvas, clipping anything outside it
pub fn draw_ring(canvas: &mut RgbaImage, ring: &Ring, stroke: Stroke, color: Rgba<u8>) {
    let min_x = (ring.center_x - ring.radius).floor().max(0.0) as u32;
    let min_y = (ring.center_y - ring.radius).floor().max(0.0) as u32;
    let max_x = (ring.center_x + ring.radius)
        .ceil()
        .min(f64::from(canvas.width())) as u32;
    let max_y = (ring.center_y + ring.radius)
        .ceil()
        .min(f64::from(canvas.height())) as u32;

    for y in min_y..max_y {
        for x in min_x..max_x {
            if ring.covers(f64::from(x) + 0.5, f64::from(y) + 0.5, stroke) {
                if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                    *pixel = color;
                }
            }
        }
    }
}

/// Make every pixel outside the inscribed circle fully transparent
pub fn apply_circle_mask(image: &mut RgbaImage) {
    let center_x = f64::from(image.width()) / 2.0;
    let center_y = f64::from(image.height()) / 2.0;
    let radius = center_x.min(center_y);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = f64::from(x) + 0.5 - center_x;
        let dy = f64::from(y) + 0.5 - center_y;
        if dx.hypot(dy) > radius {
            pixel.0[3] = 0;
        }
    }
}

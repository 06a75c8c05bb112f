//! Composition of the full button sheet

use crate::io::configuration::{
    BLEED_INDICATOR_COLOR, CUT_LINE_COLOR, DASH_LENGTH_PX, GUIDE_LINE_WIDTH_PX, PAGE_COLOR,
};
use crate::io::error::Result;
use crate::layout::geometry::LayoutGeometry;
use crate::layout::slots::layout_slots;
use crate::render::circle::{Ring, Stroke, draw_ring};
use crate::render::crop::button_face;
use crate::session::state::SessionState;
use image::{DynamicImage, Rgba, RgbaImage, imageops};

/// Which guides are drawn around each button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Solid cut lines only, as sent to the printer
    #[default]
    Print,
    /// Dashed cut lines over a bleed indicator, for checking the layout
    Preview,
}

/// Options controlling how a sheet is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Guide style
    pub mode: RenderMode,
    /// Extend the image to the cut line instead of stopping at the picture edge
    pub fill_bleed: bool,
}

impl RenderOptions {
    /// Options for the printed sheet
    pub const fn print() -> Self {
        Self {
            mode: RenderMode::Print,
            fill_bleed: false,
        }
    }

    /// Options for the on-screen preview
    pub const fn preview() -> Self {
        Self {
            mode: RenderMode::Preview,
            fill_bleed: false,
        }
    }

    /// Same options with bleed filling switched on or off
    pub const fn with_fill_bleed(self, fill_bleed: bool) -> Self {
        Self { fill_bleed, ..self }
    }
}

/// Render the sheet for whatever image the session holds
///
/// Returns `None` when no image has been uploaded yet.
///
/// # Errors
///
/// Returns an error if the geometry cannot be turned into a canvas
pub fn render_sheet(
    state: &SessionState,
    geometry: &LayoutGeometry,
    options: RenderOptions,
) -> Result<Option<RgbaImage>> {
    let Some(image) = state.image() else {
        return Ok(None);
    };

    render_image(image.pixels(), geometry, options).map(Some)
}

/// Render nine copies of `image` onto a page
///
/// # Errors
///
/// Returns an error if the geometry cannot be turned into a canvas or a
/// slot position does not fit in pixel coordinates
pub fn render_image(
    image: &DynamicImage,
    geometry: &LayoutGeometry,
    options: RenderOptions,
) -> Result<RgbaImage> {
    let (width, height) = geometry.canvas_size()?;
    let mut page = RgbaImage::from_pixel(width, height, Rgba(PAGE_COLOR));

    let (face_diameter, inset) = if options.fill_bleed {
        (geometry.total_px, 0)
    } else {
        (geometry.picture_px, geometry.bleed_px)
    };
    // Every slot shows the same content, so the face is cut once
    let face = button_face(image, face_diameter)?;
    let radius = f64::from(geometry.total_px) / 2.0;

    for slot in layout_slots(geometry) {
        let (x, y) = slot.origin()?;
        imageops::overlay(
            &mut page,
            &face,
            x + i64::from(inset),
            y + i64::from(inset),
        );

        let ring = Ring {
            center_x: x as f64 + radius,
            center_y: y as f64 + radius,
            radius,
            width: GUIDE_LINE_WIDTH_PX,
        };
        match options.mode {
            RenderMode::Print => {
                draw_ring(&mut page, &ring, Stroke::Solid, Rgba(CUT_LINE_COLOR));
            }
            RenderMode::Preview => {
                draw_ring(
                    &mut page,
                    &ring,
                    Stroke::Solid,
                    Rgba(BLEED_INDICATOR_COLOR),
                );
                draw_ring(
                    &mut page,
                    &ring,
                    Stroke::Dashed {
                        dash_px: DASH_LENGTH_PX,
                    },
                    Rgba(CUT_LINE_COLOR),
                );
            }
        }
    }

    Ok(page)
}

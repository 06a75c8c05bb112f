//! Conversion of template measurements into a pixel layout
//!
//! Every length is converted with [`round_half_up`] so that the sheet matches
//! the pixel sizes a browser would lay out for the same template. The page
//! width is kept unrounded since it only feeds the centering offset.

use crate::io::configuration::{COLUMN_OFFSET_FACTOR, GRID_COLUMNS};
use crate::io::error::{Result, computation_error};
use crate::layout::template::Template;
use num_traits::ToPrimitive;

/// Pixel dimensions and offsets of a button sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    /// Cut-line diameter
    pub total_px: u32,
    /// Picture diameter
    pub picture_px: u32,
    /// Offset of the picture circle inside the cut square
    pub bleed_px: u32,
    /// Gap between neighbouring buttons
    pub gap_px: u32,
    /// Margin above the first row
    pub margin_px: u32,
    /// Unrounded page width
    pub page_width_px: f64,
    /// Unrounded page height
    pub page_height_px: f64,
    /// Width of three buttons and the two gaps between them
    pub grid_width_px: u32,
    /// Left offset that centers the grid on the page
    pub center_offset_px: f64,
    /// Downward shift applied to the middle column
    pub column_offset_px: f64,
}

/// Convert a physical length to (unrounded) pixels
pub const fn inches_to_px(inches: f64, dpi: f64) -> f64 {
    inches * dpi
}

/// Round to the nearest integer with halves going up
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn length_px(operation: &'static str, inches: f64, dpi: f64) -> Result<u32> {
    let px = round_half_up(inches_to_px(inches, dpi));
    px.to_u32()
        .ok_or_else(|| computation_error(operation, &format!("{px} is not a valid pixel length")))
}

impl LayoutGeometry {
    /// Derive the pixel layout from a template
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails validation or a derived
    /// length does not fit in a pixel coordinate
    pub fn compute(template: &Template) -> Result<Self> {
        template.validate()?;
        let dpi = template.dpi;

        let total_px = length_px("total diameter", template.total_diameter_in, dpi)?;
        let picture_px = length_px("picture diameter", template.picture_diameter_in, dpi)?;
        let bleed_px = length_px("bleed", template.bleed_in(), dpi)?;
        let gap_px = length_px("grid gap", template.gap_in, dpi)?;
        let margin_px = length_px("printer margin", template.margin_in, dpi)?;

        let columns = GRID_COLUMNS as u32;
        let grid_width_px = total_px
            .checked_mul(columns)
            .and_then(|buttons| {
                gap_px
                    .checked_mul(columns - 1)
                    .and_then(|gaps| buttons.checked_add(gaps))
            })
            .ok_or_else(|| computation_error("grid width", &"overflow"))?;

        let page_width_px = inches_to_px(template.page_width_in, dpi);
        let page_height_px = inches_to_px(template.page_height_in, dpi);
        let center_offset_px = ((page_width_px - f64::from(grid_width_px)) / 2.0).max(0.0);
        let column_offset_px = f64::from(total_px) * COLUMN_OFFSET_FACTOR;

        let geometry = Self {
            total_px,
            picture_px,
            bleed_px,
            gap_px,
            margin_px,
            page_width_px,
            page_height_px,
            grid_width_px,
            center_offset_px,
            column_offset_px,
        };
        tracing::debug!(?geometry, "computed layout geometry");

        Ok(geometry)
    }

    /// Distance from one slot origin to the next, horizontally or vertically
    pub const fn pitch_px(&self) -> u32 {
        self.total_px + self.gap_px
    }

    /// Whole-pixel page size used as the render canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the page does not fit in a pixel buffer
    pub fn canvas_size(&self) -> Result<(u32, u32)> {
        let width = round_half_up(self.page_width_px)
            .to_u32()
            .ok_or_else(|| computation_error("canvas size", &self.page_width_px))?;
        let height = round_half_up(self.page_height_px)
            .to_u32()
            .ok_or_else(|| computation_error("canvas size", &self.page_height_px))?;
        Ok((width, height))
    }
}

//! Physical template measurements and their validation

use crate::io::configuration::{
    DEFAULT_DPI, GRID_GAP_IN, MAX_DPI, PAGE_HEIGHT_IN, PAGE_WIDTH_IN, PICTURE_DIAMETER_IN,
    PRINTER_MARGIN_IN, TOTAL_DIAMETER_IN,
};
use crate::io::error::{Result, invalid_parameter};

/// Physical measurements of a button template and the page it is printed on
///
/// All lengths are in inches. The pixel layout is derived from these values
/// by [`LayoutGeometry::compute`](crate::layout::LayoutGeometry::compute).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    /// Diameter of the visible picture circle
    pub picture_diameter_in: f64,
    /// Diameter of the cut line
    pub total_diameter_in: f64,
    /// Pixels per inch
    pub dpi: f64,
    /// Page width
    pub page_width_in: f64,
    /// Page height
    pub page_height_in: f64,
    /// Printer safe margin above the grid
    pub margin_in: f64,
    /// Gap between neighbouring buttons
    pub gap_in: f64,
}

impl Default for Template {
    fn default() -> Self {
        Self::bam()
    }
}

impl Template {
    /// The BAM!! 2.25" template on US Letter at 96 DPI
    pub const fn bam() -> Self {
        Self {
            picture_diameter_in: PICTURE_DIAMETER_IN,
            total_diameter_in: TOTAL_DIAMETER_IN,
            dpi: DEFAULT_DPI as f64,
            page_width_in: PAGE_WIDTH_IN,
            page_height_in: PAGE_HEIGHT_IN,
            margin_in: PRINTER_MARGIN_IN,
            gap_in: GRID_GAP_IN,
        }
    }

    /// Same template rendered at a different resolution
    ///
    /// # Errors
    ///
    /// Returns an error if `dpi` is zero or exceeds [`MAX_DPI`]
    pub fn with_dpi(self, dpi: u32) -> Result<Self> {
        if dpi == 0 || dpi > MAX_DPI {
            return Err(invalid_parameter(
                "dpi",
                &dpi,
                &format!("must be between 1 and {MAX_DPI}"),
            ));
        }

        Ok(Self {
            dpi: f64::from(dpi),
            ..self
        })
    }

    /// Extra image area on each side of the picture circle, in inches
    pub const fn bleed_in(&self) -> f64 {
        (self.total_diameter_in - self.picture_diameter_in) / 2.0
    }

    /// Check that the measurements describe a printable template
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any measurement is not finite
    /// - A diameter, the resolution or a page dimension is not positive
    /// - The margin or gap is negative
    /// - The cut diameter is smaller than the picture diameter
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("picture_diameter_in", self.picture_diameter_in),
            ("total_diameter_in", self.total_diameter_in),
            ("dpi", self.dpi),
            ("page_width_in", self.page_width_in),
            ("page_height_in", self.page_height_in),
        ];
        for (parameter, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }

        let non_negative = [("margin_in", self.margin_in), ("gap_in", self.gap_in)];
        for (parameter, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(parameter, &value, &"must not be negative"));
            }
        }

        if self.total_diameter_in < self.picture_diameter_in {
            return Err(invalid_parameter(
                "total_diameter_in",
                &self.total_diameter_in,
                &format!(
                    "cut diameter must be at least the picture diameter ({})",
                    self.picture_diameter_in
                ),
            ));
        }

        Ok(())
    }
}

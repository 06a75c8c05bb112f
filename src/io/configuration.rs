//! Template measurements, rendering constants and runtime defaults

// BAM!! 2.25" button template, measured in inches
/// Diameter of the visible picture circle
pub const PICTURE_DIAMETER_IN: f64 = 2.187;
/// Diameter of the cut line, picture plus bleed on both sides
pub const TOTAL_DIAMETER_IN: f64 = 2.747;

// US Letter, printed with zero driver margins
/// Page width in inches
pub const PAGE_WIDTH_IN: f64 = 8.5;
/// Page height in inches
pub const PAGE_HEIGHT_IN: f64 = 11.0;

/// Printer safe margin applied above the first row
pub const PRINTER_MARGIN_IN: f64 = 0.25;
/// Gap between neighbouring buttons (1/16 inch)
pub const GRID_GAP_IN: f64 = 0.0625;

/// Resolution used to convert inches to pixels
pub const DEFAULT_DPI: u32 = 96;

// Safety limit to prevent excessive memory allocation (a Letter page at
// 1200 DPI is already ~135 megapixels)
/// Maximum accepted resolution
pub const MAX_DPI: u32 = 1200;

// Fixed grid arrangement
/// Number of button columns
pub const GRID_COLUMNS: usize = 3;
/// Number of buttons per column
pub const GRID_ROWS: usize = 3;
/// Total buttons on one sheet
pub const BUTTON_COUNT: usize = GRID_COLUMNS * GRID_ROWS;
/// Column shifted down to interleave with its neighbours
pub const OFFSET_COLUMN: usize = 1;
/// Fraction of a button the offset column is shifted by
pub const COLUMN_OFFSET_FACTOR: f64 = 0.5;

// Guide styling
/// Stroke width of cut lines and bleed indicators
pub const GUIDE_LINE_WIDTH_PX: f64 = 1.0;
/// Arc length of a single dash (and of the gap after it)
pub const DASH_LENGTH_PX: f64 = 4.0;
/// Cut line color
pub const CUT_LINE_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Bleed indicator color, shown only in previews
pub const BLEED_INDICATOR_COLOR: [u8; 4] = [252, 165, 165, 255];
/// Page background
pub const PAGE_COLOR: [u8; 4] = [255, 255, 255, 255];

// Input and output settings
/// File extensions picked up when scanning a directory
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];
/// Suffix added to print sheet filenames
pub const OUTPUT_SUFFIX: &str = "_buttons";
/// Suffix added to preview sheet filenames
pub const PREVIEW_SUFFIX: &str = "_preview";

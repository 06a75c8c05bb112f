//! Button template geometry
//!
//! This module contains the pure layout computation:
//! - Physical template measurements
//! - Inch to pixel conversion and centering
//! - Slot placement with the offset middle column

/// Pixel layout derived from a template
pub mod geometry;
/// Slot positions for the nine buttons
pub mod slots;
/// Physical template measurements
pub mod template;

pub use geometry::LayoutGeometry;
pub use slots::ButtonSlot;
pub use template::Template;

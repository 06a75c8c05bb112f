//! Rasterization of button sheets

/// Circle masks and guide rings
pub mod circle;
/// Circular crops of the uploaded image
pub mod crop;
/// Page composition
pub mod sheet;

pub use sheet::{RenderMode, RenderOptions, render_sheet};

//! Print-ready sheets of circular button designs
//!
//! A single image is cropped into nine circles and laid out in three
//! columns on a US Letter page, the middle column shifted down by half a
//! button so the cut circles pack tightly. Sizes follow the BAM!! 2.25"
//! template, including bleed and cut-line guides.

#![forbid(unsafe_code)]

/// Command-line interface, configuration, export and error handling
pub mod io;
/// Template measurements and the pixel layout derived from them
pub mod layout;
/// Rasterization of button faces, guides and whole sheets
pub mod render;
/// The held image and how uploads replace it
pub mod session;

pub use io::error::{ButtonError, Result};

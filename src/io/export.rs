//! Writing rendered sheets to disk
//!
//! Printing a sheet means producing a US Letter PNG at the template
//! resolution with no page margin, ready to hand to any print driver.

use crate::io::error::{ButtonError, Result};
use crate::layout::geometry::LayoutGeometry;
use crate::render::sheet::{RenderOptions, render_sheet};
use crate::session::state::SessionState;
use image::ImageFormat;
use std::path::Path;

/// Write the print version of the sheet
///
/// # Errors
///
/// Returns an error if:
/// - The session holds no image
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved
pub fn print_sheet(
    state: &SessionState,
    geometry: &LayoutGeometry,
    fill_bleed: bool,
    output_path: &Path,
) -> Result<()> {
    save_sheet(
        state,
        geometry,
        RenderOptions::print().with_fill_bleed(fill_bleed),
        output_path,
    )
}

/// Write the preview version of the sheet, with dashed cut lines and bleed
/// indicators
///
/// # Errors
///
/// Same conditions as [`print_sheet`]
pub fn export_preview(
    state: &SessionState,
    geometry: &LayoutGeometry,
    fill_bleed: bool,
    output_path: &Path,
) -> Result<()> {
    save_sheet(
        state,
        geometry,
        RenderOptions::preview().with_fill_bleed(fill_bleed),
        output_path,
    )
}

fn save_sheet(
    state: &SessionState,
    geometry: &LayoutGeometry,
    options: RenderOptions,
    output_path: &Path,
) -> Result<()> {
    let page = render_sheet(state, geometry, options)?.ok_or(ButtonError::PrintDisabled)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ButtonError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    page.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| ButtonError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(
        path = %output_path.display(),
        mode = ?options.mode,
        width = page.width(),
        height = page.height(),
        "wrote sheet"
    );

    Ok(())
}

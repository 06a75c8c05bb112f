//! Reading and decoding user-selected image files

use crate::io::error::{ButtonError, Result};
use crate::session::state::{ImageReference, SessionState};
use image::ImageFormat;
use std::path::Path;

/// Image encodings accepted as uploads
pub const ACCEPTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
];

/// Decode the contents of an uploaded file
///
/// The format is detected from the data itself, so a misnamed file still
/// loads as long as its contents are an accepted image type.
///
/// # Errors
///
/// Returns an error if:
/// - The data is not recognisable as an image
/// - The image type is not in [`ACCEPTED_FORMATS`]
/// - The data cannot be decoded
pub fn decode_upload(path: &Path, bytes: &[u8]) -> Result<ImageReference> {
    let format = image::guess_format(bytes).map_err(|e| ButtonError::UnsupportedFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(ButtonError::UnsupportedFormat {
            path: path.to_path_buf(),
            reason: format!("{} images are not accepted", format.to_mime_type()),
        });
    }

    let pixels = image::load_from_memory_with_format(bytes, format).map_err(|e| {
        ButtonError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(ImageReference::new(name, format, pixels))
}

/// Read the selected file, if there is one
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn read_upload(selection: Option<&Path>) -> Result<Option<ImageReference>> {
    let Some(path) = selection else {
        tracing::debug!("no file selected");
        return Ok(None);
    };

    let bytes = std::fs::read(path).map_err(|e| ButtonError::FileSystem {
        path: path.to_path_buf(),
        operation: "read upload",
        source: e,
    })?;

    decode_upload(path, &bytes).map(Some)
}

/// Upload the selected file into the session
///
/// The session keeps its current image when nothing is selected or the
/// upload fails. Returns whether the image was replaced.
///
/// # Errors
///
/// Returns an error if the selected file cannot be read or decoded
pub fn upload(state: &mut SessionState, selection: Option<&Path>) -> Result<bool> {
    let image = read_upload(selection)?;
    Ok(state.replace_image(image))
}

//! The image currently held by a session

use image::{DynamicImage, ImageFormat};

/// A decoded upload together with where it came from
#[derive(Debug, Clone)]
pub struct ImageReference {
    name: String,
    format: ImageFormat,
    pixels: DynamicImage,
}

impl ImageReference {
    /// Wrap an already decoded image
    pub fn new(name: impl Into<String>, format: ImageFormat, pixels: DynamicImage) -> Self {
        Self {
            name: name.into(),
            format,
            pixels,
        }
    }

    /// File name the image was uploaded from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Detected encoding of the upload
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// MIME type of the upload, such as `image/png`
    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }

    /// Decoded pixel data
    pub const fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    /// Width and height of the decoded image
    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixels.width(), self.pixels.height())
    }
}

/// Holds at most one image for the lifetime of a session
///
/// Starts empty. Every successful upload replaces the held image as a
/// whole, and rendering only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    image: Option<ImageReference>,
}

impl SessionState {
    /// Create an empty session
    pub const fn new() -> Self {
        Self { image: None }
    }

    /// Replace the held image with a new upload
    ///
    /// Passing `None` means no file was selected, which keeps the current
    /// image. Returns whether the image was replaced.
    pub fn replace_image(&mut self, upload: Option<ImageReference>) -> bool {
        let Some(image) = upload else {
            return false;
        };

        tracing::debug!(
            file = image.name(),
            mime = image.mime_type(),
            replaced = self.image.is_some(),
            "holding new image"
        );
        self.image = Some(image);
        true
    }

    /// The held image, if any
    pub const fn image(&self) -> Option<&ImageReference> {
        self.image.as_ref()
    }

    /// Printing is only possible once an image has been uploaded
    pub const fn print_enabled(&self) -> bool {
        self.image.is_some()
    }
}

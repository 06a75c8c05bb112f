//! Tests for image replacement and print availability

#[cfg(test)]
mod tests {
    use buttonsheet::session::{ImageReference, SessionState};
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

    fn reference(name: &str, width: u32, height: u32) -> ImageReference {
        let pixels = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        ImageReference::new(name, ImageFormat::Png, DynamicImage::ImageRgba8(pixels))
    }

    // Tests a new session holds nothing and cannot print
    // Verified by initializing with a placeholder image
    #[test]
    fn test_new_session_is_empty() {
        let state = SessionState::new();
        assert!(state.image().is_none());
        assert!(!state.print_enabled());

        let default_state = SessionState::default();
        assert!(!default_state.print_enabled());
    }

    // Tests an upload is held and enables printing
    // Verified by discarding the upload
    #[test]
    fn test_replace_enables_print() {
        let mut state = SessionState::new();
        assert!(state.replace_image(Some(reference("cat.png", 4, 4))));

        assert!(state.print_enabled());
        assert_eq!(state.image().map(ImageReference::name), Some("cat.png"));
    }

    // Tests selecting no file keeps the current image
    // Verified by clearing the image on None
    #[test]
    fn test_no_selection_keeps_image() {
        let mut state = SessionState::new();
        state.replace_image(Some(reference("cat.png", 4, 4)));

        assert!(!state.replace_image(None));
        assert!(state.print_enabled());
        assert_eq!(state.image().map(ImageReference::name), Some("cat.png"));
    }

    // Tests selecting no file on an empty session stays disabled
    // Verified by enabling print on any replace call
    #[test]
    fn test_no_selection_on_empty_session() {
        let mut state = SessionState::new();
        assert!(!state.replace_image(None));
        assert!(!state.print_enabled());
    }

    // Tests the last upload wins
    // Verified by keeping the first image
    #[test]
    fn test_last_upload_wins() {
        let mut state = SessionState::new();
        state.replace_image(Some(reference("first.png", 4, 4)));
        assert!(state.replace_image(Some(reference("second.png", 8, 2))));

        let image = state.image().unwrap();
        assert_eq!(image.name(), "second.png");
        assert_eq!(image.dimensions(), (8, 2));
    }

    // Tests reference accessors
    // Verified by reporting the wrong MIME type
    #[test]
    fn test_reference_accessors() {
        let image = reference("dog.png", 3, 5);
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.dimensions(), (3, 5));
        assert_eq!(image.pixels().width(), 3);
    }
}

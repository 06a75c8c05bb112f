//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use buttonsheet::io::cli::{Cli, FileProcessor, has_accepted_extension};
    use buttonsheet::io::configuration::DEFAULT_DPI;
    use buttonsheet::io::progress::ProgressManager;
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tracing::Level;

    fn create_test_cli(target: &str) -> Cli {
        let args = vec!["program", target, "--quiet"];
        Cli::parse_from(args)
    }

    fn write_png(path: &Path) {
        RgbImage::from_pixel(20, 10, Rgb([220, 120, 20]))
            .save(path)
            .unwrap();
    }

    // Tests CLI parsing with only required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(vec!["program", "photo.png"]);

        assert_eq!(cli.target, PathBuf::from("photo.png"));
        assert_eq!(cli.dpi, DEFAULT_DPI);
        assert!(cli.output_dir.is_none());
        assert!(!cli.preview);
        assert!(!cli.fill_bleed);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from(vec![
            "program",
            "photos",
            "--output-dir",
            "out",
            "--dpi",
            "300",
            "--preview",
            "--fill-bleed",
            "--quiet",
            "--no-skip",
            "--verbose",
        ]);

        assert_eq!(cli.target, PathBuf::from("photos"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.dpi, 300);
        assert!(cli.preview);
        assert!(cli.fill_bleed);
        assert!(cli.quiet);
        assert!(!cli.skip_existing());
        assert_eq!(cli.verbose, 1);
    }

    // Tests short flags and repeated verbosity
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(vec!["program", "a.png", "-d", "150", "-p", "-f", "-vv"]);

        assert_eq!(cli.dpi, 150);
        assert!(cli.preview);
        assert!(cli.fill_bleed);
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    // Tests progress and skip defaults
    // Verified by inverting boolean logic in helper methods
    #[test]
    fn test_cli_helpers() {
        let cli = Cli::parse_from(vec!["program", "a.png"]);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), Level::WARN);

        let quiet = Cli::parse_from(vec!["program", "a.png", "-q", "-v"]);
        assert!(!quiet.should_show_progress());
        assert_eq!(quiet.log_level(), Level::ERROR);
    }

    // Tests extension matching ignores case
    // Verified by comparing extensions case-sensitively
    #[test]
    fn test_accepted_extension() {
        assert!(has_accepted_extension(Path::new("a.PNG")));
        assert!(has_accepted_extension(Path::new("dir/b.jpeg")));
        assert!(!has_accepted_extension(Path::new("notes.txt")));
        assert!(!has_accepted_extension(Path::new("no_extension")));
    }

    // Tests output naming next to the input and in an output directory
    // Verified by dropping the output directory
    #[test]
    fn test_output_paths() {
        let processor = FileProcessor::new(create_test_cli("photos"));
        assert_eq!(
            processor.output_path(Path::new("photos/cat.jpg")),
            PathBuf::from("photos/cat_buttons.png")
        );
        assert_eq!(
            processor.preview_path(Path::new("photos/cat.jpg")),
            PathBuf::from("photos/cat_preview.png")
        );

        let redirected = FileProcessor::new(Cli::parse_from(vec![
            "program", "photos", "-o", "sheets", "-q",
        ]));
        assert_eq!(
            redirected.output_path(Path::new("photos/cat.jpg")),
            PathBuf::from("sheets/cat_buttons.png")
        );
    }

    // Tests error handling for missing targets
    // Verified by removing error return for nonexistent files
    #[test]
    fn test_process_nonexistent_target() {
        let processor = FileProcessor::new(create_test_cli("nonexistent.png"));
        assert!(processor.process().is_err());
    }

    // Tests error handling for non-image files
    // Verified by removing file type validation
    #[test]
    fn test_process_invalid_file_type() {
        let temp_dir = TempDir::new().unwrap();
        let txt_file = temp_dir.path().join("test.txt");
        fs::write(&txt_file, "not an image").unwrap();

        let processor = FileProcessor::new(create_test_cli(txt_file.to_str().unwrap()));
        assert!(processor.process().is_err());
    }

    // Tests an out-of-range resolution fails before any file is touched
    // Verified by skipping template validation
    #[test]
    fn test_process_invalid_dpi() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("a.png");
        write_png(&input);

        let cli = Cli::parse_from(vec!["program", input.to_str().unwrap(), "-q", "-d", "0"]);
        assert!(FileProcessor::new(cli).process().is_err());
        assert!(!temp_dir.path().join("a_buttons.png").exists());
    }

    // Tests processing a single image writes its sheet
    // Verified by skipping the print step
    #[test]
    fn test_process_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("badge.png");
        write_png(&input);

        let processor = FileProcessor::new(create_test_cli(input.to_str().unwrap()));
        processor.process().unwrap();

        let sheet = image::open(temp_dir.path().join("badge_buttons.png")).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (816, 1056));
        assert!(!temp_dir.path().join("badge_preview.png").exists());
    }

    // Tests a directory is processed with previews into an output directory
    // Verified by ignoring the preview flag
    #[test]
    fn test_process_directory_with_preview() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("out");
        write_png(&temp_dir.path().join("one.png"));
        write_png(&temp_dir.path().join("two.png"));
        fs::rename(
            temp_dir.path().join("two.png"),
            temp_dir.path().join("two.PNG"),
        )
        .unwrap();
        fs::write(temp_dir.path().join("readme.txt"), "skip me").unwrap();

        let cli = Cli::parse_from(vec![
            "program",
            temp_dir.path().to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
            "-p",
            "-q",
        ]);
        FileProcessor::new(cli).process().unwrap();

        assert!(out_dir.join("one_buttons.png").exists());
        assert!(out_dir.join("one_preview.png").exists());
        assert!(out_dir.join("two_buttons.png").exists());
        assert!(!out_dir.join("readme_buttons.png").exists());
    }

    // Tests processing empty directories
    // Verified by adding error for empty directories
    #[test]
    fn test_process_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let processor = FileProcessor::new(create_test_cli(temp_dir.path().to_str().unwrap()));
        assert!(processor.process().is_ok());
    }

    // Tests skip logic when output file exists
    // Verified by removing skip check
    #[test]
    fn test_skip_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let input_file = temp_dir.path().join("test.png");
        let output_file = temp_dir.path().join("test_buttons.png");

        fs::write(&input_file, "fake png").unwrap();
        fs::write(&output_file, "fake png").unwrap();

        let processor = FileProcessor::new(create_test_cli(input_file.to_str().unwrap()));
        assert!(processor.process().is_ok());
        assert_eq!(fs::read_to_string(&output_file).unwrap(), "fake png");
    }

    // Tests --no-skip reprocesses and surfaces decode failures
    // Verified by always skipping existing outputs
    #[test]
    fn test_no_skip_reprocesses() {
        let temp_dir = TempDir::new().unwrap();
        let input_file = temp_dir.path().join("test.png");
        fs::write(&input_file, "fake png").unwrap();
        fs::write(temp_dir.path().join("test_buttons.png"), "old").unwrap();

        let cli = Cli::parse_from(vec!["program", input_file.to_str().unwrap(), "-q", "-n"]);
        assert!(FileProcessor::new(cli).process().is_err());
    }

    // Tests sheets from earlier runs are not treated as inputs
    // Verified by removing the generated-file filter
    #[test]
    fn test_generated_sheets_ignored() {
        let temp_dir = TempDir::new().unwrap();
        write_png(&temp_dir.path().join("old.png"));
        fs::write(temp_dir.path().join("old_buttons.png"), "not decodable").unwrap();
        fs::write(temp_dir.path().join("old_preview.png"), "not decodable").unwrap();

        let cli = Cli::parse_from(vec!["program", temp_dir.path().to_str().unwrap(), "-q", "-n"]);
        assert!(FileProcessor::new(cli).process().is_ok());
        assert!(image::open(temp_dir.path().join("old_buttons.png")).is_ok());
        assert!(!temp_dir.path().join("old_buttons_buttons.png").exists());
    }

    // Tests an input whose name only looks like a sheet is still processed
    // Verified by filtering on the name suffix alone
    #[test]
    fn test_suffixed_input_without_source_processed() {
        let temp_dir = TempDir::new().unwrap();
        write_png(&temp_dir.path().join("team_preview.png"));

        let processor = FileProcessor::new(create_test_cli(temp_dir.path().to_str().unwrap()));
        processor.process().unwrap();

        assert!(temp_dir.path().join("team_preview_buttons.png").exists());
    }

    // Tests a rerun with --preview writes the missing preview
    // Verified by skipping on the print sheet alone
    #[test]
    fn test_preview_written_on_rerun() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("cat.png");
        write_png(&input);

        FileProcessor::new(create_test_cli(input.to_str().unwrap()))
            .process()
            .unwrap();
        assert!(temp_dir.path().join("cat_buttons.png").exists());
        assert!(!temp_dir.path().join("cat_preview.png").exists());

        let cli = Cli::parse_from(vec!["program", input.to_str().unwrap(), "-q", "-p"]);
        FileProcessor::new(cli).process().unwrap();
        assert!(temp_dir.path().join("cat_preview.png").exists());
    }

    // Tests a rerun with every requested output present is skipped
    // Verified by ignoring the preview when deciding to skip
    #[test]
    fn test_preview_rerun_skipped_when_complete() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("cat.png");
        fs::write(&input, "fake png").unwrap();
        fs::write(temp_dir.path().join("cat_buttons.png"), "old").unwrap();
        fs::write(temp_dir.path().join("cat_preview.png"), "old").unwrap();

        let cli = Cli::parse_from(vec!["program", input.to_str().unwrap(), "-q", "-p"]);
        assert!(FileProcessor::new(cli).process().is_ok());
    }

    // Tests the progress display is cleared when a file fails
    // Verified by returning before finishing the progress bar
    #[test]
    fn test_progress_cleared_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("broken.png");
        fs::write(&input, "fake png").unwrap();

        let processor = FileProcessor::new(Cli::parse_from(vec!["program", input.to_str().unwrap()]));
        assert!(processor.process().is_err());
        assert!(processor.progress().is_some_and(ProgressManager::is_finished));
    }
}

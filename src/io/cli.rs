//! Command-line interface for turning images into button sheets

use crate::io::configuration::{ACCEPTED_EXTENSIONS, DEFAULT_DPI, OUTPUT_SUFFIX, PREVIEW_SUFFIX};
use crate::io::error::{ButtonError, Result, target_error};
use crate::io::export::{export_preview, print_sheet};
use crate::io::logging::verbosity_level;
use crate::io::progress::ProgressManager;
use crate::layout::geometry::LayoutGeometry;
use crate::layout::template::Template;
use crate::session::intake::upload;
use crate::session::state::SessionState;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "buttonsheet")]
#[command(
    author,
    version,
    about = "Lay out an image as a printable sheet of 2.25\" buttons"
)]
/// Command-line arguments for the sheet generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory for generated sheets (defaults to next to each input)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Resolution of the generated sheet in pixels per inch
    #[arg(short, long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Also write a preview with dashed cut lines and bleed indicators
    #[arg(short, long)]
    pub preview: bool,

    /// Extend the image into the bleed area up to the cut line
    #[arg(short, long)]
    pub fill_bleed: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by `--verbose` and `--quiet`
    pub const fn log_level(&self) -> tracing::Level {
        verbosity_level(self.verbose, self.quiet)
    }
}

/// Whether the path carries one of the accepted image extensions
pub fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

/// Orchestrates sheet generation for every input file
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution is invalid, the target cannot be
    /// read, or any file fails to load or export
    pub fn process(&self) -> Result<()> {
        let template = Template::bam().with_dpi(self.cli.dpi)?;
        let geometry = LayoutGeometry::compute(&template)?;

        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::info!(path = %self.cli.target.display(), "nothing to process");
            return Ok(());
        }

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let outcome = files
            .iter()
            .try_for_each(|file| self.process_file(file, &geometry));

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        outcome
    }

    /// Progress display, absent when running with `--quiet`
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !has_accepted_extension(target) {
                return Err(target_error(
                    target,
                    &format!(
                        "Target file must be an image ({})",
                        ACCEPTED_EXTENSIONS.join(", ")
                    ),
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| ButtonError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut candidates = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| ButtonError::FileSystem {
                        path: target.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if path.is_file() && has_accepted_extension(&path) {
                    candidates.push(path);
                }
            }
            candidates.sort();

            let files = candidates
                .iter()
                .filter(|path| !self.is_generated(path, &candidates))
                .filter(|path| self.should_process_file(path))
                .cloned()
                .collect();
            Ok(files)
        } else {
            Err(target_error(
                target,
                "Target must be an image file or directory",
            ))
        }
    }

    // A sheet from an earlier run sits next to the input it was made from
    fn is_generated(&self, path: &Path, candidates: &[PathBuf]) -> bool {
        if self.cli.output_dir.is_some() {
            return false;
        }

        let generated = candidates
            .iter()
            .filter(|input| input.as_path() != path)
            .any(|input| self.output_path(input) == path || self.preview_path(input) == path);
        if generated {
            tracing::debug!(input = %path.display(), "skipping generated sheet");
        }
        generated
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let sheet_exists = self.output_path(input_path).exists();
        let preview_exists = !self.cli.preview || self.preview_path(input_path).exists();
        if sheet_exists && preview_exists {
            tracing::warn!(
                input = %input_path.display(),
                "skipping, output exists"
            );
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path, geometry: &LayoutGeometry) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let mut session = SessionState::new();
        upload(&mut session, Some(input_path))?;

        print_sheet(
            &session,
            geometry,
            self.cli.fill_bleed,
            &self.output_path(input_path),
        )?;

        if self.cli.preview {
            export_preview(
                &session,
                geometry,
                self.cli.fill_bleed,
                &self.preview_path(input_path),
            )?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    /// Where the print sheet for `input_path` is written
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        self.sibling_path(input_path, OUTPUT_SUFFIX)
    }

    /// Where the preview sheet for `input_path` is written
    pub fn preview_path(&self, input_path: &Path) -> PathBuf {
        self.sibling_path(input_path, PREVIEW_SUFFIX)
    }

    fn sibling_path(&self, input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}.png", stem.to_string_lossy());

        match (&self.cli.output_dir, input_path.parent()) {
            (Some(dir), _) => dir.join(output_name),
            (None, Some(parent)) => parent.join(output_name),
            (None, None) => PathBuf::from(output_name),
        }
    }
}

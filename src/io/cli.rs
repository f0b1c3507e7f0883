//! Command-line interface for reporting on grid text files

use crate::analysis::statistics::GridStatistics;
use crate::io::configuration::{
    DEFAULT_BORDER_VALUE, DEFAULT_RENDER_SCALE, INPUT_EXTENSION, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{GridError, Result};
use crate::io::image::export_grid_as_png;
use crate::io::loader::load_grid;
use crate::io::progress::ProgressManager;
use crate::spatial::{Grid, Point, Region};
use clap::Parser;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "textgrid")]
#[command(
    author,
    version,
    about = "Inspect text grids: flood fills, pattern regions and renders"
)]
/// Command-line arguments for the grid inspection tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input text file or directory of text files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Treat opposite edges of the grid as adjacent
    #[arg(short, long)]
    pub wrap: bool,

    /// Value reported for cells outside the grid
    #[arg(short, long, default_value_t = DEFAULT_BORDER_VALUE.to_string())]
    pub border: String,

    /// Report regions of each row matching this regular expression
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Report the flood-fill selection starting at X,Y
    #[arg(short, long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    pub select: Option<Point>,

    /// Only consider the four orthogonal neighbours
    #[arg(short, long)]
    pub orthogonal: bool,

    /// Export each grid as a PNG next to its input
    #[arg(short, long)]
    pub render: bool,

    /// Pixels per cell edge when rendering
    #[arg(long, default_value_t = DEFAULT_RENDER_SCALE)]
    pub scale: u32,

    /// Render even if the output image exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
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

    /// Check if diagonal neighbours take part in flood fills
    pub const fn diagonal(&self) -> bool {
        !self.orthogonal
    }
}

/// Parse an `X,Y` coordinate argument
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated integers.
pub fn parse_point(text: &str) -> std::result::Result<Point, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{text}'"))?;
    let x = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid X coordinate '{x}': {e}"))?;
    let y = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid Y coordinate '{y}': {e}"))?;
    Ok(Point::new(x, y))
}

/// Outcome of processing one grid file
#[derive(Debug)]
pub struct GridReport {
    /// Input file
    pub path: PathBuf,
    /// Summary of the grid contents
    pub statistics: GridStatistics,
    /// Start point and size of the requested flood fill
    pub selection: Option<(Point, usize)>,
    /// Regions matching the requested pattern
    pub regions: Vec<Region>,
    /// Rendered image, if one was written
    pub rendered: Option<PathBuf>,
}

impl fmt::Display for GridReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.statistics)?;
        if let Some((start, size)) = self.selection {
            write!(f, "\n  selection from {start}: {size} cells")?;
        }
        if !self.regions.is_empty() {
            write!(f, "\n  {} matching regions", self.regions.len())?;
            for region in &self.regions {
                write!(f, "\n    {} {}", region.origin(), region.grid_string())?;
            }
        }
        if let Some(rendered) = &self.rendered {
            write!(f, "\n  rendered to {}", rendered.display())?;
        }
        Ok(())
    }
}

/// Orchestrates batch processing of grid files with progress tracking
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
    /// Returns an error if the target is invalid, the pattern does not
    /// compile, or a file cannot be read or rendered
    pub fn process(&mut self) -> Result<Vec<GridReport>> {
        let pattern = self
            .cli
            .pattern
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| GridError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .transpose()?;

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let reports = files
            .iter()
            .map(|file| self.process_file(file, pattern.as_ref()))
            .collect();

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        reports
    }

    /// Progress tracking for the batch, absent in quiet mode
    pub const fn progress_manager(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if has_input_extension(target) {
                Ok(vec![target.clone()])
            } else {
                Err(GridError::InvalidTarget {
                    path: target.clone(),
                    reason: "Target file must be a .txt grid",
                })
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|source| GridError::FileSystem {
                path: target.clone(),
                operation: "list directory",
                source,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file() && has_input_extension(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(GridError::InvalidTarget {
                path: target.clone(),
                reason: "Target must be a .txt file or directory",
            })
        }
    }

    fn process_file(&self, input_path: &Path, pattern: Option<&Regex>) -> Result<GridReport> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }
        log::info!("Processing {}", input_path.display());

        let mut grid = load_grid(input_path)?;
        grid.wrap = self.cli.wrap;
        grid.border_value.clone_from(&self.cli.border);

        let statistics = GridStatistics::from_grid(&grid, self.cli.diagonal());

        let selection = self
            .cli
            .select
            .map(|start| (start, grid.fuzzy_select(start, self.cli.diagonal()).len()));

        let regions = pattern
            .map(|regex| grid.find_regions_with(regex))
            .transpose()?
            .unwrap_or_default();

        let rendered = if self.cli.render {
            self.render(&grid, input_path)?
        } else {
            None
        };

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(GridReport {
            path: input_path.to_path_buf(),
            statistics,
            selection,
            regions,
            rendered,
        })
    }

    fn render(&self, grid: &Grid, input_path: &Path) -> Result<Option<PathBuf>> {
        let output_path = Self::get_output_path(input_path);
        if self.cli.skip_existing() && output_path.exists() {
            log::info!("Skipping render of {} (output exists)", input_path.display());
            return Ok(None);
        }
        export_grid_as_png(grid, self.cli.scale, &output_path)?;
        Ok(Some(output_path))
    }

    /// Image path written for an input file: `<stem>_grid.png` beside it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
}

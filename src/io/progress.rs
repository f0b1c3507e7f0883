//! Progress display for batch processing of grid files

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Single progress bar advancing once per processed file
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call [`ProgressManager::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show the bar sized for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
    }

    /// Show the name of the file being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Advance past a finished file
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Number of files completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Whether the bar has been finished
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

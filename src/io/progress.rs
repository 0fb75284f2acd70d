//! Batch progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many images of a batch are done
///
/// Tallies generated and skipped images so the run can be summarized even
/// when the bar itself is hidden.
pub struct ProgressManager {
    bar: ProgressBar,
    generated: usize,
    skipped: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a manager that tracks counts but draws nothing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(0),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            generated: 0,
            skipped: 0,
        }
    }

    /// Set the number of images in the batch
    pub fn initialize(&mut self, image_count: usize) {
        self.bar.set_length(image_count as u64);
        self.bar.set_position(0);
        self.generated = 0;
        self.skipped = 0;
    }

    /// Show the image being generated
    pub fn start_image(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Count a finished image
    pub fn complete_image(&mut self, elapsed: Duration) {
        self.generated += 1;
        log::debug!("image {} done in {elapsed:?}", self.generated + self.skipped);
        self.bar.inc(1);
    }

    /// Count an image whose output already existed
    pub fn skip_image(&mut self) {
        self.skipped += 1;
        self.bar.inc(1);
    }

    /// Images generated so far
    pub const fn generated(&self) -> usize {
        self.generated
    }

    /// Images skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Images accounted for so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar and leave a summary
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} generated, {} skipped",
            self.generated, self.skipped
        ));
    }
}

//! Progress display driven by the scanner's per-batch callback.

use crate::scanner::ScanProgress;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// A progress line showing how many ports have been probed.
pub struct ScanProgressBar {
    bar: ProgressBar,
}

impl ScanProgressBar {
    /// Create a bar drawn to stderr, or a hidden one when `visible` is false.
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(total as u64),
            if visible {
                ProgressDrawTarget::stderr()
            } else {
                ProgressDrawTarget::hidden()
            },
        );
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        bar.set_message(progress_message(0, total));
        Self { bar }
    }

    /// Record a completed batch.
    pub fn update(&self, progress: ScanProgress) {
        self.bar.set_position(progress.completed as u64);
        self.bar
            .set_message(progress_message(progress.completed, progress.total));
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Finished sniffing ports");
    }
}

fn progress_message(completed: usize, total: usize) -> String {
    format!("Sniffing ports: {} of the {} sniffed", completed, total)
}

//! Progress display while replaying stroke scripts

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Single progress bar tracking replayed script events
///
/// Hidden bars accept every call and draw nothing, so callers never need
/// to branch on whether progress is shown.
pub struct ReplayProgress {
    bar: ProgressBar,
}

impl ReplayProgress {
    /// Create a visible progress bar for `total` events of `script`
    pub fn new(script: &Path, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(Self::style());
        bar.set_prefix(
            script
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        Self { bar }
    }

    /// Create a progress tracker that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report the number of events replayed so far
    pub fn update(&self, replayed: usize) {
        self.bar.set_position(replayed as u64);
    }

    /// Events reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn style() -> ProgressStyle {
        let template =
            format!("{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}

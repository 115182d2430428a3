//! Progress display for grid generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Cells: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Terminal progress for a single generation run
///
/// Quiet runs get a hidden bar so call sites stay unconditional.
#[derive(Debug)]
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Start a bar sized for `total_cells`; `visible` controls drawing
    pub fn start(total_cells: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(total_cells as u64);
            bar.set_style(CELL_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };

        Self { bar }
    }

    /// Record one synthesized cell
    pub fn cell_done(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

//! Progress display while frames render

use crate::algorithm::scheduler::{RunSummary, StopReason};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Frames: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the frames of one render
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Bar drawing to stderr for `total_frames` frames
    pub fn new(total_frames: u64) -> Self {
        Self::with_target(total_frames, ProgressDrawTarget::stderr())
    }

    /// Bar that tracks progress without drawing anything
    pub fn hidden(total_frames: u64) -> Self {
        Self::with_target(total_frames, ProgressDrawTarget::hidden())
    }

    fn with_target(total_frames: u64, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total_frames), target);
        bar.set_style(FRAME_STYLE.clone());
        Self { bar }
    }

    /// Record one more rendered frame at animation time `time`
    pub fn frame_rendered(&self, time: f64) {
        self.bar.inc(1);
        self.bar.set_message(format!("t={time:.2}"));
    }

    /// Frames recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar for a finished frame loop
    ///
    /// A completed loop fills the bar; an early stop leaves it at the frames
    /// actually rendered.
    pub fn finish(&self, summary: &RunSummary) {
        match summary.reason {
            StopReason::Completed => self.bar.finish_with_message("done"),
            StopReason::Cancelled => self.bar.abandon_with_message("cancelled"),
            StopReason::Unscheduled => self.bar.abandon_with_message("stopped"),
        }
    }
}

//! Command-line interface for rendering the animation to image files

use crate::algorithm::frame::{Animation, render_frame};
use crate::algorithm::scheduler::{CancelToken, RenderedFrame, run};
use crate::canvas::{RasterSurface, RecordingSurface};
use crate::io::configuration::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_FRAME_DELAY_MS, DEFAULT_FRAMES, DEFAULT_PIXEL_RATIO,
    MAX_PIXEL_RATIO,
};
use crate::io::error::{AnimationError, Result, invalid_parameter};
use crate::io::image::export_frame_as_png;
use crate::io::progress::ProgressManager;
use crate::io::visualization::FrameCapture;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug, Clone)]
#[command(name = "evotess")]
#[command(
    author,
    version,
    about = "Render the evolving tessellation animation to a GIF or PNG"
)]
/// Command-line arguments for the renderer
pub struct Cli {
    /// Output file: `.gif` for the animation, `.png` for its last frame
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of frames to render
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u64,

    /// Frames to advance the clock by before rendering starts
    #[arg(short, long, default_value_t = 0)]
    pub start: u64,

    /// Capture only every Nth rendered frame
    #[arg(short, long, default_value_t = 1)]
    pub every: u64,

    /// Delay between GIF frames in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub delay: u32,

    /// Device pixels per canvas unit
    #[arg(short, long, default_value_t = DEFAULT_PIXEL_RATIO)]
    pub pixel_ratio: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log a draw-call summary for every rendered frame
    #[arg(short, long)]
    pub trace: bool,
}

/// What the output path asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Looping animated GIF of the captured frames
    Gif,
    /// PNG of the final rendered frame
    Png,
}

impl OutputKind {
    /// Infer the output kind from a path's extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is neither `gif` nor `png`
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("gif") => Ok(Self::Gif),
            Some("png") => Ok(Self::Png),
            _ => Err(AnimationError::UnsupportedOutput {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reject parameter combinations that cannot produce output
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid parameter
    pub fn validate(&self) -> Result<OutputKind> {
        if self.frames == 0 {
            return Err(invalid_parameter(
                "frames",
                &self.frames,
                &"at least one frame must be rendered",
            ));
        }
        if self.every == 0 {
            return Err(invalid_parameter(
                "every",
                &self.every,
                &"capture interval must be at least 1",
            ));
        }
        if self.delay == 0 {
            return Err(invalid_parameter(
                "delay",
                &self.delay,
                &"frame delay must be at least 1 ms",
            ));
        }
        if !(1..=MAX_PIXEL_RATIO).contains(&self.pixel_ratio) {
            return Err(invalid_parameter(
                "pixel-ratio",
                &self.pixel_ratio,
                &format!("must be between 1 and {MAX_PIXEL_RATIO}"),
            ));
        }
        OutputKind::from_path(&self.output)
    }
}

/// Drives one render from parsed arguments to a written file
pub struct AnimationRunner {
    cli: Cli,
    cancel: CancelToken,
}

impl AnimationRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            cancel: CancelToken::new(),
        }
    }

    /// Token that stops the render after the frame in flight
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Render the animation and write the requested output
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, encoding or writing fails
    pub fn process(&mut self) -> Result<()> {
        let kind = self.cli.validate()?;
        let start_time = Instant::now();
        info!(
            output = %self.cli.output.display(),
            frames = self.cli.frames,
            start = self.cli.start,
            pixel_ratio = self.cli.pixel_ratio,
            "rendering animation"
        );

        let mut animation = Animation::new();
        animation.mount(RasterSurface::new(
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            self.cli.pixel_ratio,
        ));
        animation.fast_forward(self.cli.start);

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.frames)
        } else {
            ProgressManager::hidden(self.cli.frames)
        };
        let mut capture = FrameCapture::new(self.cli.delay)?;
        let every = self.cli.every;
        let trace = self.cli.trace;

        let outcome = run(
            &mut animation,
            Some(self.cli.frames),
            &self.cancel,
            |frame: RenderedFrame<'_, RasterSurface>| -> Result<()> {
                progress.frame_rendered(frame.time);
                if trace {
                    log_draw_summary(frame.index, frame.time);
                }
                if kind == OutputKind::Gif && frame.index % every == 0 {
                    capture.push(frame.surface.to_image());
                }
                Ok(())
            },
        );

        // The last frame is taken before teardown releases the surface
        let last_frame = match (&outcome, kind) {
            (Ok(summary), OutputKind::Png) if summary.frames > 0 => {
                animation.surface().map(RasterSurface::to_image)
            }
            _ => None,
        };
        let time = animation.time();
        animation.teardown();
        let summary = outcome?;
        progress.finish(&summary);

        if summary.frames < self.cli.frames {
            warn!(
                rendered = summary.frames,
                requested = self.cli.frames,
                reason = ?summary.reason,
                "render stopped early"
            );
        }

        match kind {
            OutputKind::Gif => {
                capture.export_gif(&self.cli.output)?;
                info!(
                    captured = capture.len(),
                    skip_factor = capture.skip_factor(),
                    "animation written"
                );
            }
            OutputKind::Png => {
                let image = last_frame.ok_or_else(|| AnimationError::EmptyCapture {
                    path: self.cli.output.clone(),
                })?;
                export_frame_as_png(&image, &self.cli.output)?;
                info!(time, "frame written");
            }
        }

        info!(
            frames = summary.frames,
            elapsed_ms = start_time.elapsed().as_millis(),
            "render finished"
        );
        Ok(())
    }
}

/// Re-draw the frame at `time` into a recorder and log what it contains
fn log_draw_summary(index: u64, time: f64) {
    let mut recorder = RecordingSurface::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let tiles = render_frame(&mut recorder, time);
    let summary = recorder.summary();
    info!(
        frame = index,
        time,
        tiles,
        strokes = summary.strokes,
        segments = summary.segments,
        fills = summary.fills,
        "draw calls"
    );
}

//! Frame capture and animated GIF export

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{AnimationError, Result, ensure_parent_dir, invalid_parameter};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Collects rendered frames for export as a looping GIF
#[derive(Debug, Clone)]
pub struct FrameCapture {
    frames: Vec<RgbaImage>,
    frame_delay_ms: u32,
}

impl FrameCapture {
    /// Start an empty capture whose frames are `frame_delay_ms` apart
    ///
    /// # Errors
    ///
    /// Returns an error if the delay is zero
    pub fn new(frame_delay_ms: u32) -> Result<Self> {
        if frame_delay_ms == 0 {
            return Err(invalid_parameter(
                "delay",
                &frame_delay_ms,
                &"frame delay must be at least 1 ms",
            ));
        }
        Ok(Self {
            frames: Vec::new(),
            frame_delay_ms,
        })
    }

    /// Append a frame
    pub fn push(&mut self, frame: RgbaImage) {
        self.frames.push(frame);
    }

    /// Number of frames captured
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame has been captured
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Requested delay between frames
    pub const fn frame_delay_ms(&self) -> u32 {
        self.frame_delay_ms
    }

    /// Keep every `skip_factor`-th frame so the apparent speed survives
    /// viewers clamping short delays
    ///
    /// For example a 5 ms delay with viewers honouring only 20 ms keeps every
    /// 4th frame and shows each for 20 ms.
    pub const fn skip_factor(&self) -> u32 {
        if self.frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(self.frame_delay_ms)
        } else {
            1
        }
    }

    /// Export the captured frames as an infinitely looping GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<()> {
        if self.frames.is_empty() {
            return Err(AnimationError::EmptyCapture {
                path: output_path.to_path_buf(),
            });
        }

        let skip_factor = self.skip_factor();
        let delay = Delay::from_numer_denom_ms(self.frame_delay_ms() * skip_factor, 1);
        let frames = self
            .frames
            .iter()
            .step_by(skip_factor as usize)
            .map(|image| Frame::from_parts(image.clone(), 0, 0, delay));

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| AnimationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e| AnimationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        Ok(())
    }
}

//! PNG export of a single rendered frame

use crate::io::error::{AnimationError, Result, ensure_parent_dir};
use image::RgbaImage;
use std::path::Path;

/// Write a frame as a PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The frame has no pixels (for example after teardown)
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_frame_as_png(frame: &RgbaImage, output_path: &Path) -> Result<()> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(AnimationError::EmptyCapture {
            path: output_path.to_path_buf(),
        });
    }

    ensure_parent_dir(output_path)?;

    frame
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| AnimationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

//! Tests for frame capture and GIF export

#[cfg(test)]
mod tests {
    use evotess::AnimationError;
    use evotess::io::visualization::FrameCapture;
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, Rgba, RgbaImage};
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    fn solid(shade: u8) -> RgbaImage {
        RgbaImage::from_pixel(4, 4, Rgba([shade, shade, shade, 255]))
    }

    fn decoded_frame_count(path: &Path) -> usize {
        let Ok(file) = File::open(path) else {
            return 0;
        };
        let Ok(decoder) = GifDecoder::new(BufReader::new(file)) else {
            return 0;
        };
        decoder.into_frames().collect_frames().map_or(0, |frames| frames.len())
    }

    // Tests a zero delay is rejected
    // Verified by accepting any delay
    #[test]
    fn test_zero_delay_rejected() {
        assert!(matches!(
            FrameCapture::new(0),
            Err(AnimationError::InvalidParameter {
                parameter: "delay",
                ..
            })
        ));
    }

    // Tests frames are skipped only below the viewer minimum delay
    // Verified by rounding the factor down
    #[test]
    fn test_skip_factor() {
        let factor = |delay| FrameCapture::new(delay).map(|c| c.skip_factor()).ok();
        assert_eq!(factor(20), Some(1));
        assert_eq!(factor(50), Some(1));
        assert_eq!(factor(10), Some(2));
        assert_eq!(factor(5), Some(4));
        assert_eq!(factor(7), Some(3));
        assert_eq!(factor(1), Some(20));
    }

    // Tests the requested delay is kept as given
    // Verified by storing the skip-adjusted delay
    #[test]
    fn test_frame_delay_kept() {
        let delays = [5, 20, 40].map(|delay| FrameCapture::new(delay).map(|c| c.frame_delay_ms()).ok());
        assert_eq!(delays, [Some(5), Some(20), Some(40)]);
    }

    // Tests exporting without frames is an error and writes nothing
    // Verified by writing an empty GIF
    #[test]
    fn test_export_empty_capture() {
        let Ok(temp_dir) = tempfile::tempdir() else {
            return;
        };
        let path = temp_dir.path().join("empty.gif");
        let Ok(capture) = FrameCapture::new(20) else {
            return;
        };
        assert!(capture.is_empty());
        assert!(matches!(
            capture.export_gif(&path),
            Err(AnimationError::EmptyCapture { .. })
        ));
        assert!(!path.exists());
    }

    // Tests every captured frame is written at the default delay
    // Verified by dropping the last frame
    #[test]
    fn test_export_all_frames() {
        let Ok(temp_dir) = tempfile::tempdir() else {
            return;
        };
        let path = temp_dir.path().join("out/anim.gif");
        let Ok(mut capture) = FrameCapture::new(20) else {
            return;
        };
        for shade in [0, 80, 160] {
            capture.push(solid(shade));
        }
        assert_eq!(capture.len(), 3);

        assert!(capture.export_gif(&path).is_ok());
        assert_eq!(decoded_frame_count(&path), 3);
    }

    // Tests short delays keep every k-th frame
    // Verified by writing every frame regardless of delay
    #[test]
    fn test_export_skips_frames() {
        let Ok(temp_dir) = tempfile::tempdir() else {
            return;
        };
        let path = temp_dir.path().join("fast.gif");
        let Ok(mut capture) = FrameCapture::new(5) else {
            return;
        };
        for shade in 0..10 {
            capture.push(solid(shade * 20));
        }

        assert!(capture.export_gif(&path).is_ok());
        assert_eq!(decoded_frame_count(&path), 3);
    }
}

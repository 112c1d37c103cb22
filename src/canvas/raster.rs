//! Anti-aliased software rasteriser
//!
//! Pixels are kept as premultiplied RGBA floats so that many faint strokes
//! accumulate without 8-bit rounding drift; conversion to 8-bit happens only
//! when a frame is exported. Strokes are rasterised by distance to segment:
//! coverage per pixel is the maximum over the path's segments, then the
//! path is composited once with source-over.

use crate::canvas::state::CanvasState;
use crate::canvas::surface::Surface;
use crate::spatial::Transform;
use image::{Rgba, RgbaImage};
use ndarray::{Array2, Array3};

/// Software-rendered surface with a device pixel ratio
#[derive(Debug, Clone)]
pub struct RasterSurface {
    state: CanvasState,
    width: u32,
    height: u32,
    pixel_ratio: u32,
    /// Premultiplied RGBA indexed by (`row`, `col`, `channel`)
    pixels: Array3<f32>,
}

impl RasterSurface {
    /// Create a transparent surface of `width`×`height` logical units
    ///
    /// Each logical unit covers `pixel_ratio`×`pixel_ratio` device pixels;
    /// a ratio of zero is treated as one.
    pub fn new(width: u32, height: u32, pixel_ratio: u32) -> Self {
        let pixel_ratio = pixel_ratio.max(1);
        let base = Transform::scaling(f64::from(pixel_ratio));
        Self {
            state: CanvasState::new(base),
            width,
            height,
            pixel_ratio,
            pixels: Array3::zeros(device_shape(width, height, pixel_ratio)),
        }
    }

    /// Device pixels per logical unit
    pub const fn pixel_ratio(&self) -> u32 {
        self.pixel_ratio
    }

    /// Width of the backing store in device pixels
    pub const fn device_width(&self) -> u32 {
        self.width * self.pixel_ratio()
    }

    /// Height of the backing store in device pixels
    pub const fn device_height(&self) -> u32 {
        self.height * self.pixel_ratio()
    }

    /// Straight-alpha 8-bit colour of a device pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let (row, col) = (y as usize, x as usize);
        let alpha = *self.pixels.get([row, col, 3])?;
        let channel = |index: usize| {
            let value = self.pixels.get([row, col, index]).copied().unwrap_or(0.0);
            let straight = if alpha > 0.0 { value / alpha } else { 0.0 };
            to_byte(straight)
        };
        Some([channel(0), channel(1), channel(2), to_byte(alpha)])
    }

    /// Whether every device pixel is fully transparent
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&value| value == 0.0)
    }

    /// Copy the backing store into an 8-bit image
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.device_width(), self.device_height(), |x, y| {
            Rgba(self.pixel(x, y).unwrap_or([0, 0, 0, 0]))
        })
    }

    fn blend(&mut self, row: usize, col: usize, color: [f32; 4], coverage: f32) {
        let alpha = color[3] * coverage;
        if alpha <= 0.0 {
            return;
        }
        let keep = 1.0 - alpha;
        for (channel, &value) in color.iter().take(3).enumerate() {
            if let Some(dst) = self.pixels.get_mut([row, col, channel]) {
                *dst = value.mul_add(alpha, *dst * keep);
            }
        }
        if let Some(dst) = self.pixels.get_mut([row, col, 3]) {
            *dst = alpha + *dst * keep;
        }
    }

    /// Device pixels whose centres fall inside a local-space rectangle
    fn rect_pixels(&self, x: f64, y: f64, width: f64, height: f64) -> Vec<(usize, usize)> {
        let transform = self.state.transform();
        let Some(inverse) = transform.inverse() else {
            return Vec::new();
        };
        let (left, right) = (x.min(x + width), x.max(x + width));
        let (top, bottom) = (y.min(y + height), y.max(y + height));

        let corners = [[left, top], [right, top], [right, bottom], [left, bottom]]
            .map(|corner| transform.apply(corner));
        let Some(bounds) = self.device_bounds(&corners, 0.0) else {
            return Vec::new();
        };

        let mut inside = Vec::new();
        for row in bounds.rows.clone() {
            for col in bounds.cols.clone() {
                let [lx, ly] = inverse.apply([col as f64 + 0.5, row as f64 + 0.5]);
                if lx >= left && lx < right && ly >= top && ly < bottom {
                    inside.push((row, col));
                }
            }
        }
        inside
    }

    /// Clipped device-pixel bounding box of `points` grown by `margin`
    fn device_bounds(&self, points: &[[f64; 2]], margin: f64) -> Option<PixelBounds> {
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for point in points {
            for axis in 0..2 {
                let value = point.get(axis).copied().unwrap_or(0.0);
                if let (Some(lo), Some(hi)) = (min.get_mut(axis), max.get_mut(axis)) {
                    *lo = lo.min(value);
                    *hi = hi.max(value);
                }
            }
        }
        let clip = |lo: f64, hi: f64, limit: u32| {
            let start = (lo - margin).floor().max(0.0);
            let end = (hi + margin).ceil().min(f64::from(limit));
            (start.is_finite() && end.is_finite() && start < end)
                .then_some(start as usize..end as usize)
        };
        Some(PixelBounds {
            cols: clip(min[0], max[0], self.device_width())?,
            rows: clip(min[1], max[1], self.device_height())?,
        })
    }
}

#[derive(Debug, Clone)]
struct PixelBounds {
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
}

impl Surface for RasterSurface {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn stroke(&mut self) {
        let color = self.state.stroke_style().to_rgba();
        if color[3] <= 0.0 {
            return;
        }
        let segments: Vec<_> = self.state.path().segments().collect();
        let half_width = self.state.device_line_width() / 2.0;
        let margin = half_width + 1.0;

        let points: Vec<[f64; 2]> = segments.iter().flat_map(|&(p, q)| [p, q]).collect();
        let Some(bounds) = self.device_bounds(&points, margin) else {
            return;
        };
        let (row0, col0) = (bounds.rows.start, bounds.cols.start);
        let mut coverage = Array2::<f32>::zeros((bounds.rows.len(), bounds.cols.len()));

        for &(p, q) in &segments {
            let Some(local) = self.device_bounds(&[p, q], margin) else {
                continue;
            };
            for row in local.rows {
                for col in local.cols.clone() {
                    let centre = [col as f64 + 0.5, row as f64 + 0.5];
                    let value = stroke_coverage(distance_to_segment(centre, p, q), half_width);
                    if let Some(cell) = coverage.get_mut([row - row0, col - col0]) {
                        *cell = cell.max(value);
                    }
                }
            }
        }

        for ((row, col), &value) in coverage.indexed_iter() {
            if value > 0.0 {
                self.blend(row0 + row, col0 + col, color, value);
            }
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let color = self.state.fill_style().to_rgba();
        for (row, col) in self.rect_pixels(x, y, width, height) {
            self.blend(row, col, color, 1.0);
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        for (row, col) in self.rect_pixels(x, y, width, height) {
            for channel in 0..4 {
                if let Some(dst) = self.pixels.get_mut([row, col, channel]) {
                    *dst = 0.0;
                }
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = Array3::zeros(device_shape(width, height, self.pixel_ratio));
        self.state.reset();
    }
}

const fn device_shape(width: u32, height: u32, pixel_ratio: u32) -> (usize, usize, usize) {
    (
        (height * pixel_ratio) as usize,
        (width * pixel_ratio) as usize,
        4,
    )
}

fn to_byte(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Coverage of a pixel whose centre lies `distance` from the stroke spine
///
/// Strokes thinner than a pixel keep a one-pixel footprint but fade in
/// proportion to their width.
fn stroke_coverage(distance: f64, half_width: f64) -> f32 {
    let reach = half_width.max(0.5) + 0.5 - distance;
    let thinness = (half_width * 2.0).min(1.0);
    (reach.clamp(0.0, 1.0) * thinness) as f32
}

fn distance_to_segment(point: [f64; 2], start: [f64; 2], end: [f64; 2]) -> f64 {
    let [dx, dy] = [end[0] - start[0], end[1] - start[1]];
    let [px, py] = [point[0] - start[0], point[1] - start[1]];
    let length_sq = dx.mul_add(dx, dy * dy);
    let t = if length_sq > 0.0 {
        (px.mul_add(dx, py * dy) / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (px - t * dx).hypot(py - t * dy)
}

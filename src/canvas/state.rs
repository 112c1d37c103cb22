//! Drawing state shared by every surface backend
//!
//! Mirrors the state an immediate-mode canvas keeps: a current transform, a
//! stack of saved states, stroke and fill styles, line width and the path
//! under construction. Path points are mapped to device space as they are
//! added, so later transform changes do not move geometry already built.

use crate::math::Hsla;
use crate::spatial::Transform;
use std::f64::consts::TAU;

/// Upper bound on segments used to flatten one arc
const MAX_ARC_SEGMENTS: usize = 256;

/// Minimum segments used to flatten a full circle
const MIN_CIRCLE_SEGMENTS: f64 = 8.0;

/// Path under construction, already in device coordinates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<Vec<[f64; 2]>>,
}

impl Path {
    /// Open subpaths, each a polyline in device space
    pub fn subpaths(&self) -> &[Vec<[f64; 2]>] {
        &self.subpaths
    }

    /// Whether the path holds no points at all
    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(Vec::is_empty)
    }

    /// All line segments of the path
    pub fn segments(&self) -> impl Iterator<Item = ([f64; 2], [f64; 2])> + '_ {
        self.subpaths
            .iter()
            .flat_map(|points| points.windows(2).filter_map(|w| Some((*w.first()?, *w.get(1)?))))
    }

    fn move_to(&mut self, point: [f64; 2]) {
        self.subpaths.push(vec![point]);
    }

    fn line_to(&mut self, point: [f64; 2]) {
        match self.subpaths.last_mut() {
            Some(points) => points.push(point),
            // A line with no current point behaves as a move
            None => self.move_to(point),
        }
    }

    fn clear(&mut self) {
        self.subpaths.clear();
    }
}

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    transform: Transform,
    stroke_style: Hsla,
    fill_style: Hsla,
    line_width: f64,
}

/// Complete mutable state of a canvas-like surface
#[derive(Debug, Clone)]
pub struct CanvasState {
    base: Transform,
    transform: Transform,
    stroke_style: Hsla,
    fill_style: Hsla,
    line_width: f64,
    stack: Vec<Snapshot>,
    path: Path,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(Transform::IDENTITY)
    }
}

impl CanvasState {
    /// Fresh state whose transform starts at (and resets to) `base`
    pub const fn new(base: Transform) -> Self {
        Self {
            base,
            transform: base,
            stroke_style: Hsla::BLACK,
            fill_style: Hsla::BLACK,
            line_width: 1.0,
            stack: Vec::new(),
            path: Path {
                subpaths: Vec::new(),
            },
        }
    }

    /// Discard saved states, styles and path, returning to the base transform
    pub fn reset(&mut self) {
        *self = Self::new(self.base);
    }

    /// Push the current transform and styles
    pub fn save(&mut self) {
        self.stack.push(Snapshot {
            transform: self.transform,
            stroke_style: self.stroke_style,
            fill_style: self.fill_style,
            line_width: self.line_width,
        });
    }

    /// Pop the most recent saved state; ignored when nothing is saved
    pub fn restore(&mut self) {
        if let Some(snapshot) = self.stack.pop() {
            self.transform = snapshot.transform;
            self.stroke_style = snapshot.stroke_style;
            self.fill_style = snapshot.fill_style;
            self.line_width = snapshot.line_width;
        }
    }

    /// Number of states currently saved
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Current local-to-device transform
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// Translate the local frame
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.translate(dx, dy);
    }

    /// Rotate the local frame
    pub fn rotate(&mut self, angle: f64) {
        self.transform = self.transform.rotate(angle);
    }

    /// Scale the local frame
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.transform = self.transform.scale(sx, sy);
    }

    /// Current stroke colour
    pub const fn stroke_style(&self) -> Hsla {
        self.stroke_style
    }

    /// Set the stroke colour
    pub const fn set_stroke_style(&mut self, color: Hsla) {
        self.stroke_style = color;
    }

    /// Current fill colour
    pub const fn fill_style(&self) -> Hsla {
        self.fill_style
    }

    /// Set the fill colour
    pub const fn set_fill_style(&mut self, color: Hsla) {
        self.fill_style = color;
    }

    /// Line width in local units
    pub const fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Line width after the current transform's scale is applied
    pub fn device_line_width(&self) -> f64 {
        self.line_width * self.transform.scale_factor()
    }

    /// Set the line width; non-positive or non-finite widths are ignored
    pub fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    /// Path under construction
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Discard the current path
    pub fn begin_path(&mut self) {
        self.path.clear();
    }

    /// Start a new subpath at a local point
    pub fn move_to(&mut self, x: f64, y: f64) {
        let point = self.transform.apply([x, y]);
        self.path.move_to(point);
    }

    /// Extend the current subpath to a local point
    pub fn line_to(&mut self, x: f64, y: f64) {
        let point = self.transform.apply([x, y]);
        self.path.line_to(point);
    }

    /// Add a clockwise circular arc, flattened into line segments
    ///
    /// The arc joins the open subpath with a straight line, or starts a new
    /// subpath when none is open. Sweeps larger than a full turn are clamped.
    pub fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        if !radius.is_finite() || radius < 0.0 {
            return;
        }
        let sweep = (end - start).clamp(-TAU, TAU);
        let device_radius = radius * self.transform.scale_factor();
        let per_turn = (device_radius * TAU / 2.0).max(MIN_CIRCLE_SEGMENTS);
        let segments = ((sweep.abs() / TAU) * per_turn)
            .ceil()
            .clamp(1.0, MAX_ARC_SEGMENTS as f64) as usize;

        let point_at = |step: usize| {
            let angle = (sweep * step as f64).mul_add(1.0 / segments as f64, start);
            [radius.mul_add(angle.cos(), cx), radius.mul_add(angle.sin(), cy)]
        };

        let [x0, y0] = point_at(0);
        if self.path.subpaths.last().is_some_and(|points| !points.is_empty()) {
            self.line_to(x0, y0);
        } else {
            self.move_to(x0, y0);
        }
        for step in 1..=segments {
            let [x, y] = point_at(step);
            self.line_to(x, y);
        }
    }
}

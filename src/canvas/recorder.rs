//! Surface that records draw calls instead of rasterising them

use crate::canvas::state::CanvasState;
use crate::canvas::surface::Surface;
use crate::math::Hsla;

/// One recorded operation, with geometry already in device space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A stroked path
    Stroke {
        /// Polylines making up the path
        subpaths: Vec<Vec<[f64; 2]>>,
        /// Stroke colour
        color: Hsla,
        /// Line width after transform scaling
        line_width: f64,
    },
    /// A filled rectangle
    FillRect {
        /// Rectangle corners after transformation
        corners: [[f64; 2]; 4],
        /// Fill colour
        color: Hsla,
    },
    /// A cleared rectangle
    ClearRect {
        /// Rectangle corners after transformation
        corners: [[f64; 2]; 4],
    },
    /// The backing store was replaced
    Resize {
        /// New logical width
        width: u32,
        /// New logical height
        height: u32,
    },
}

/// Counts of recorded operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawSummary {
    /// Stroke calls
    pub strokes: usize,
    /// Line segments across all strokes
    pub segments: usize,
    /// Rectangle fills
    pub fills: usize,
    /// Rectangle clears
    pub clears: usize,
}

/// Surface keeping an ordered log of [`DrawCommand`]s
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    state: CanvasState,
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface of the given logical size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: CanvasState::default(),
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Everything recorded so far, oldest first
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Remove and return the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded strokes as (`subpaths`, `color`, `line_width`)
    pub fn strokes(&self) -> impl Iterator<Item = (&[Vec<[f64; 2]>], Hsla, f64)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Stroke {
                subpaths,
                color,
                line_width,
            } => Some((subpaths.as_slice(), *color, *line_width)),
            _ => None,
        })
    }

    /// Tally of the recorded commands
    pub fn summary(&self) -> DrawSummary {
        let mut summary = DrawSummary::default();
        for command in &self.commands {
            match command {
                DrawCommand::Stroke { subpaths, .. } => {
                    summary.strokes += 1;
                    summary.segments += subpaths
                        .iter()
                        .map(|points| points.len().saturating_sub(1))
                        .sum::<usize>();
                }
                DrawCommand::FillRect { .. } => summary.fills += 1,
                DrawCommand::ClearRect { .. } => summary.clears += 1,
                DrawCommand::Resize { .. } => {}
            }
        }
        summary
    }

    fn device_corners(&self, x: f64, y: f64, width: f64, height: f64) -> [[f64; 2]; 4] {
        let transform = self.state.transform();
        [
            [x, y],
            [x + width, y],
            [x + width, y + height],
            [x, y + height],
        ]
        .map(|corner| transform.apply(corner))
    }
}

impl Surface for RecordingSurface {
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
        self.commands.push(DrawCommand::Stroke {
            subpaths: self.state.path().subpaths().to_vec(),
            color: self.state.stroke_style(),
            line_width: self.state.device_line_width(),
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let corners = self.device_corners(x, y, width, height);
        self.commands.push(DrawCommand::FillRect {
            corners,
            color: self.state.fill_style(),
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let corners = self.device_corners(x, y, width, height);
        self.commands.push(DrawCommand::ClearRect { corners });
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.state.reset();
        self.commands.push(DrawCommand::Resize { width, height });
    }
}

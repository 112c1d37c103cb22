//! Drawing surfaces
//!
//! The animation draws through the [`Surface`] trait only. Two backends are
//! provided: a software rasteriser producing images, and a recorder that
//! logs draw calls for inspection.

/// Draw-call recording backend
pub mod recorder;
/// Anti-aliased software rasteriser backend
pub mod raster;
/// Transform stack, styles and path construction shared by backends
pub mod state;
/// The surface trait and its scoped save/restore guard
pub mod surface;

pub use raster::RasterSurface;
pub use recorder::{DrawCommand, DrawSummary, RecordingSurface};
pub use state::CanvasState;
pub use surface::{Scoped, Surface};

//! The animation itself: tiles, fields, frames and the loop that drives them

/// Tile layout for one field and its rendering
pub mod field;
/// Frame composition, clock and mount/tick/teardown lifecycle
pub mod frame;
/// Cooperative frame loop with cancellation
pub mod scheduler;
/// Per-tile geometry and drawing
pub mod tile;

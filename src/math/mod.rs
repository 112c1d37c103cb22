//! Mathematical building blocks for the animation

/// Colour values with CSS `hsla()` semantics
pub mod color;
/// Periodic evolution cycle mapping time to stage and progress
pub mod evolution;

pub use color::Hsla;
pub use evolution::{EvolutionState, Stage, evolution_stage};

//! Evolving tessellation fields
//!
//! A procedural animation of hexagonal tile fields that cycle through four
//! stages (birth, growth, dissolution and rebirth). Every frame is a pure
//! function of a single clock value: three fields of tiles are laid out on
//! staggered lattices and each tile's outline, inner connections and
//! particles are derived from its local evolution state.

#![forbid(unsafe_code)]

/// Tile renderer, field generator, frame driver and frame loop
pub mod algorithm;
/// Drawing-surface contract with raster and recording backends
pub mod canvas;
/// Configuration, error handling, export and command-line interface
pub mod io;
/// Evolution cycle and colour math
pub mod math;
/// Transforms and lattice geometry
pub mod spatial;

pub use io::error::{AnimationError, Result};

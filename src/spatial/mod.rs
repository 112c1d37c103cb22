//! Coordinate geometry shared by the canvas and the field layout
//!
//! This module contains:
//! - Affine transforms in canvas matrix form
//! - The staggered hexagonal lattice tiles are laid out on

/// Staggered hexagonal lattice of tile positions
pub mod lattice;
/// Affine transforms for scoped canvas state
pub mod transform;

pub use lattice::{HexLattice, LatticeCell};
pub use transform::Transform;

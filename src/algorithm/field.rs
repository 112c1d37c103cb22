//! Field generator: a disc of tiles on a staggered lattice
//!
//! Each field is a lattice centred on the canvas centre plus the field
//! offset. Cells farther than `SCALE * scale * BOUNDARY_FACTOR` from the field
//! centre are skipped; every other cell becomes one tile whose size, phase and
//! local evolution depend on its distance, so rings of tiles evolve out of
//! step with one another.

use crate::algorithm::tile::{TileParams, draw_tile};
use crate::canvas::Surface;
use crate::io::configuration::{
    BOUNDARY_FACTOR, GRID_RADIUS, SCALE, SPACING_FACTOR, TILE_SHRINK, TILE_SIZE_FACTOR,
};
use crate::math::evolution_stage;
use crate::spatial::{HexLattice, LatticeCell};

/// Phase advance per unit of distance from the field centre
const PHASE_DISTANCE_RATE: f64 = 0.01;

/// Evolution time lead per unit of distance from the field centre
const EVOLUTION_DISTANCE_RATE: f64 = 0.02;

/// Tile spin per unit of field time
const ROTATION_RATE: f64 = 0.2;

/// Placement and timing of one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Offset of the field centre from the canvas centre
    pub offset: [f64; 2],
    /// Size multiplier applied to spacing, boundary and tiles
    pub scale: f64,
    /// Added to global time for everything in the field
    pub time_offset: f64,
}

impl FieldSpec {
    /// Create a field specification
    pub const fn new(offset: [f64; 2], scale: f64, time_offset: f64) -> Self {
        Self {
            offset,
            scale,
            time_offset,
        }
    }

    /// Lattice spacing between neighbouring tiles
    pub fn spacing(&self) -> f64 {
        SCALE * self.scale * SPACING_FACTOR
    }

    /// Largest distance from the field centre at which tiles are drawn
    pub fn boundary_radius(&self) -> f64 {
        SCALE * self.scale * BOUNDARY_FACTOR
    }

    /// Lattice this field lays its tiles on
    pub fn lattice(&self) -> HexLattice {
        HexLattice::new(self.spacing(), GRID_RADIUS)
    }

    /// Tile size at `distance` from the field centre
    ///
    /// Shrinks linearly from full size at the centre to `1 - TILE_SHRINK` of
    /// it at the boundary radius.
    pub fn tile_size(&self, distance: f64) -> f64 {
        let unit = SCALE * self.scale;
        let falloff = (distance / self.boundary_radius()).mul_add(-TILE_SHRINK, 1.0);
        unit * TILE_SIZE_FACTOR * falloff
    }

    /// Tile parameters for one lattice cell at global time `time`
    pub fn tile_for_cell(&self, cell: &LatticeCell, canvas_center: [f64; 2], time: f64) -> TileParams {
        let distance = cell.distance();
        let angle = cell.angle();
        let field_time = time + self.time_offset;
        let phase = distance.mul_add(PHASE_DISTANCE_RATE, field_time);

        TileParams {
            center: [
                canvas_center[0] + self.offset[0] + cell.offset[0],
                canvas_center[1] + self.offset[1] + cell.offset[1],
            ],
            size: self.tile_size(distance),
            rotation: field_time.mul_add(ROTATION_RATE, angle),
            phase,
            morph: (phase + angle).sin().mul_add(0.5, 0.5),
            evolution: evolution_stage(distance.mul_add(EVOLUTION_DISTANCE_RATE, field_time)),
        }
    }
}

/// Every visible tile of a field, row-major from the top-left
pub fn field_tiles(spec: &FieldSpec, canvas_center: [f64; 2], time: f64) -> Vec<TileParams> {
    let lattice = spec.lattice();
    lattice
        .cells_within(spec.boundary_radius())
        .map(|cell| spec.tile_for_cell(&cell, canvas_center, time))
        .collect()
}

/// Draw a field around the surface centre, returning how many tiles were drawn
pub fn render_field<S: Surface + ?Sized>(surface: &mut S, spec: &FieldSpec, time: f64) -> usize {
    let canvas_center = [
        f64::from(surface.width()) / 2.0,
        f64::from(surface.height()) / 2.0,
    ];
    let tiles = field_tiles(spec, canvas_center, time);
    for tile in &tiles {
        draw_tile(surface, tile, time);
    }
    tiles.len()
}

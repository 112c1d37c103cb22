//! Staggered hexagonal lattice used to lay out tile centres
//!
//! Rows are spaced `0.75 * spacing` apart and columns `0.866 * spacing`
//! apart; odd rows are pushed sideways by half a spacing. The shift uses the
//! remainder of `row / 2` with the sign of the row, so odd rows above the
//! centre shift left while odd rows below shift right.

/// Horizontal column pitch as a fraction of spacing (≈ √3 / 2)
pub const COLUMN_PITCH: f64 = 0.866;

/// Vertical row pitch as a fraction of spacing
pub const ROW_PITCH: f64 = 0.75;

/// One lattice position relative to the lattice centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeCell {
    /// Row index in `[-radius, radius]`
    pub row: i32,
    /// Column index in `[-radius, radius]`
    pub col: i32,
    /// Offset from the lattice centre
    pub offset: [f64; 2],
}

impl LatticeCell {
    /// Euclidean distance from the lattice centre
    pub fn distance(&self) -> f64 {
        self.offset[0].hypot(self.offset[1])
    }

    /// Polar angle of the cell around the lattice centre
    pub fn angle(&self) -> f64 {
        self.offset[1].atan2(self.offset[0])
    }
}

/// Square block of staggered lattice cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLattice {
    /// Distance between neighbouring cells before pitch factors
    pub spacing: f64,
    /// Largest absolute row and column index
    pub radius: i32,
}

impl HexLattice {
    /// Create a lattice with the given spacing and row/column radius
    pub const fn new(spacing: f64, radius: i32) -> Self {
        Self { spacing, radius }
    }

    /// Offset of the cell at `(row, col)` from the lattice centre
    pub fn offset(&self, row: i32, col: i32) -> [f64; 2] {
        let stagger = f64::from(row % 2) * self.spacing * 0.5;
        [
            (f64::from(col) * self.spacing).mul_add(COLUMN_PITCH, stagger),
            f64::from(row) * self.spacing * ROW_PITCH,
        ]
    }

    /// Number of cells, visible or not
    pub const fn len(&self) -> usize {
        if self.radius < 0 {
            return 0;
        }
        let side = (2 * self.radius + 1) as usize;
        side * side
    }

    /// Whether the lattice has no cells
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every cell, row-major from the top-left
    pub fn cells(&self) -> impl Iterator<Item = LatticeCell> + '_ {
        let radius = self.radius;
        (-radius..=radius).flat_map(move |row| {
            (-radius..=radius).map(move |col| LatticeCell {
                row,
                col,
                offset: self.offset(row, col),
            })
        })
    }

    /// Cells lying within `max_distance` of the centre
    pub fn cells_within(&self, max_distance: f64) -> impl Iterator<Item = LatticeCell> + '_ {
        self.cells()
            .filter(move |cell| cell.distance() <= max_distance)
    }
}

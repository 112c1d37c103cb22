//! Periodic evolution cycle driving every tile's form
//!
//! Time is folded onto a `4π` cycle (after scaling by 0.1) and cut into four
//! equal stages. Each stage reports how far through itself the cycle is, so
//! callers can interpolate shape parameters continuously inside a stage while
//! switching policy at the boundaries.

use std::f64::consts::PI;
use std::fmt;

/// Rate at which raw time advances through the cycle
pub const CYCLE_RATE: f64 = 0.1;

/// Length of one full cycle in scaled time units
pub const CYCLE_LENGTH: f64 = 4.0 * PI;

/// Period of the cycle measured in raw time units (`40π`)
pub const PERIOD: f64 = CYCLE_LENGTH / CYCLE_RATE;

/// Discrete phase of the evolution cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Simple forms emerging
    Birth,
    /// Increasing complexity
    Growth,
    /// Forms breaking apart
    Dissolution,
    /// Returning to simplicity
    Rebirth,
}

impl Stage {
    /// All stages in cycle order
    pub const ALL: [Self; 4] = [Self::Birth, Self::Growth, Self::Dissolution, Self::Rebirth];

    /// Stage for a cycle index, wrapping modulo 4
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Birth,
            1 => Self::Growth,
            2 => Self::Dissolution,
            _ => Self::Rebirth,
        }
    }

    /// Position of the stage in the cycle (0..=3)
    pub const fn index(self) -> usize {
        match self {
            Self::Birth => 0,
            Self::Growth => 1,
            Self::Dissolution => 2,
            Self::Rebirth => 3,
        }
    }

    /// Stage that follows this one
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Birth => "birth",
            Self::Growth => "growth",
            Self::Dissolution => "dissolution",
            Self::Rebirth => "rebirth",
        };
        f.write_str(name)
    }
}

/// Where a point in time sits inside the evolution cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvolutionState {
    /// Current stage
    pub stage: Stage,
    /// Fraction of the current stage already elapsed, in `[0, 1)`
    pub progress: f64,
}

impl EvolutionState {
    /// State at the very start of the cycle
    pub const START: Self = Self {
        stage: Stage::Birth,
        progress: 0.0,
    };

    /// Stage index as a float, for colour and geometry formulas
    pub const fn stage_value(&self) -> f64 {
        self.stage.index() as f64
    }

    /// Continuous position in the cycle, in `[0, 4)`
    pub fn position(&self) -> f64 {
        self.stage_value() + self.progress
    }
}

impl Default for EvolutionState {
    fn default() -> Self {
        Self::START
    }
}

/// Map a time value onto the evolution cycle
///
/// Total over finite inputs, negative times included: the fold uses a
/// Euclidean remainder so the stage is always one of the four and progress
/// always lies in `[0, 1)`. Non-finite input maps to [`EvolutionState::START`].
pub fn evolution_stage(time: f64) -> EvolutionState {
    let cycle = (time * CYCLE_RATE).rem_euclid(CYCLE_LENGTH);
    if !cycle.is_finite() {
        return EvolutionState::START;
    }

    // x - floor(x) is exact, which keeps progress strictly below 1
    let scaled = cycle / PI;
    let whole = scaled.floor();
    EvolutionState {
        stage: Stage::from_index(whole as usize),
        progress: scaled - whole,
    }
}

//! Tile renderer: one morphing polygon with connective strokes and particles
//!
//! A tile is drawn in its own frame, translated to its centre and rotated by
//! its rotation, inside a scoped save/restore. Its form is decided by the
//! evolution stage it is in ([`TileStyle`]); the geometry helpers are pure so
//! they can be inspected without a surface.

use crate::canvas::{Scoped, Surface};
use crate::math::{EvolutionState, Hsla, Stage};
use std::f64::consts::{PI, TAU};

/// Radius of a particle circle in local units
pub const PARTICLE_RADIUS: f64 = 2.0;

/// Most particles a tile can emit (reached only in the limit of progress)
pub const MAX_PARTICLES: f64 = 8.0;

/// Everything needed to draw one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileParams {
    /// Tile centre on the surface
    pub center: [f64; 2],
    /// Nominal outline radius, always positive
    pub size: f64,
    /// Rotation of the tile frame in radians
    pub rotation: f64,
    /// Per-tile scalar desynchronising the outline waves
    pub phase: f64,
    /// Factor in `[0, 1]` widening the inner connections
    pub morph: f64,
    /// Local evolution state of the tile
    pub evolution: EvolutionState,
}

/// Shape policy derived from an evolution state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    /// Outline vertex count, at least 3
    pub points: usize,
    /// Wave frequency of the outline and reach of inner connections
    pub complexity: f64,
    /// Base stroke opacity
    pub opacity: f64,
    /// Whether inner connections are drawn
    pub inner_connections: bool,
}

impl TileStyle {
    /// Policy for a given stage and progress
    pub fn for_evolution(evolution: EvolutionState) -> Self {
        let p = evolution.progress;
        match evolution.stage {
            Stage::Birth => Self {
                points: p.mul_add(3.0, 3.0).floor() as usize,
                complexity: p.mul_add(0.5, 0.5),
                opacity: p.mul_add(0.2, 0.2),
                inner_connections: true,
            },
            Stage::Growth => Self {
                points: 6 + (p * 6.0).floor() as usize,
                complexity: p.mul_add(2.0, 1.0),
                opacity: p.mul_add(0.3, 0.4),
                inner_connections: true,
            },
            Stage::Dissolution => Self {
                points: 12 - (p * 6.0).floor() as usize,
                complexity: p.mul_add(-2.0, 3.0),
                opacity: p.mul_add(-0.5, 0.7),
                inner_connections: p < 0.5,
            },
            Stage::Rebirth => Self {
                points: 6 - (p * 3.0).floor() as usize,
                complexity: p.mul_add(-0.5, 1.0),
                opacity: p.mul_add(0.2, 0.2),
                inner_connections: true,
            },
        }
    }

    /// Step between connected vertices; denser when complexity is high
    pub fn connection_stride(&self) -> usize {
        (3.0 - self.complexity).floor().max(1.0) as usize
    }
}

/// Hue of a tile's outline, cycling 0..240 over the four stages
pub fn tile_hue(evolution: EvolutionState) -> f64 {
    evolution
        .stage_value()
        .mul_add(60.0, evolution.progress * 60.0)
        % 360.0
}

/// Stroke width, swelling in the middle of every stage
pub fn tile_line_width(evolution: EvolutionState) -> f64 {
    (evolution.progress * PI).sin().mul_add(0.5, 1.0)
}

/// Closed outline in the tile frame; the first vertex is repeated at the end
pub fn outline(params: &TileParams, style: &TileStyle, global_time: f64) -> Vec<[f64; 2]> {
    let points = style.points as f64;
    (0..=style.points)
        .map(|i| {
            let i = i as f64;
            let angle = i / points * TAU;
            let wave = (i.mul_add(style.complexity, params.phase)).sin() * 0.1;
            let breath = (global_time.mul_add(0.5, i)).sin() * 0.05;
            let r = params.size * (1.0 + wave + breath);
            [angle.cos() * r, angle.sin() * r]
        })
        .collect()
}

/// Two outline-adjacent spokes meeting at an inner point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// The spoke origins near the outline
    pub outer: [[f64; 2]; 2],
    /// The shared inner point on the bisecting angle
    pub inner: [f64; 2],
}

/// Inner connections of a tile, empty when the style disables them
pub fn connections(params: &TileParams, style: &TileStyle) -> Vec<Connection> {
    if !style.inner_connections {
        return Vec::new();
    }
    let points = style.points as f64;
    let inner_radius =
        params.size * 0.5 * params.morph.mul_add(0.5, 1.0) * style.complexity * 0.3;
    let rim = |index: f64| {
        let angle = index / points * TAU;
        let r = params.size * (params.phase + index).sin().mul_add(0.1, 1.0);
        (angle, [angle.cos() * r, angle.sin() * r])
    };

    (0..style.points)
        .step_by(style.connection_stride())
        .map(|i| {
            let i = i as f64;
            let (angle1, first) = rim(i);
            let (angle2, second) = rim(i + 2.0);
            let mid = (angle1 + angle2) / 2.0;
            Connection {
                outer: [first, second],
                inner: [mid.cos() * inner_radius, mid.sin() * inner_radius],
            }
        })
        .collect()
}

/// Opacity of inner connections, fading out through dissolution
pub fn connection_opacity(evolution: EvolutionState, style: &TileStyle) -> f64 {
    match evolution.stage {
        Stage::Dissolution => style.opacity * (1.0 - evolution.progress),
        _ => style.opacity,
    }
}

/// Number of particles a tile emits; only dissolving and reborn tiles emit
pub fn particle_count(evolution: EvolutionState) -> usize {
    match evolution.stage {
        Stage::Dissolution | Stage::Rebirth => (evolution.progress * MAX_PARTICLES).floor() as usize,
        Stage::Birth | Stage::Growth => 0,
    }
}

/// Particle centres in the tile frame, orbiting with global time
pub fn particles(params: &TileParams, global_time: f64) -> Vec<[f64; 2]> {
    let count = particle_count(params.evolution);
    if count == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|p| {
            let p = p as f64;
            let angle = (p / count as f64).mul_add(TAU, global_time * 2.0);
            let radius = params.size * global_time.mul_add(3.0, p).sin().mul_add(0.3, 0.8);
            [angle.cos() * radius, angle.sin() * radius]
        })
        .collect()
}

/// Draw one tile; the surface state is restored on return
pub fn draw_tile<S: Surface + ?Sized>(surface: &mut S, params: &TileParams, global_time: f64) {
    let mut surface = Scoped::new(surface);
    let [cx, cy] = params.center;
    surface.translate(cx, cy);
    surface.rotate(params.rotation);

    let evolution = params.evolution;
    let style = TileStyle::for_evolution(evolution);
    let hue = tile_hue(evolution);

    surface.begin_path();
    for (i, &[x, y]) in outline(params, &style, global_time).iter().enumerate() {
        if i == 0 {
            surface.move_to(x, y);
        } else {
            surface.line_to(x, y);
        }
    }
    surface.set_stroke_style(Hsla::new(hue, 30.0, 30.0, style.opacity));
    surface.set_line_width(tile_line_width(evolution));
    surface.stroke();

    if style.inner_connections {
        let alpha = connection_opacity(evolution, &style);
        surface.set_stroke_style(Hsla::new(hue, 40.0, 40.0, alpha));
        for connection in connections(params, &style) {
            let [xi, yi] = connection.inner;
            for [x, y] in connection.outer {
                surface.begin_path();
                surface.move_to(x, y);
                surface.line_to(xi, yi);
                surface.stroke();
            }
        }
    }

    let positions = particles(params, global_time);
    if !positions.is_empty() {
        surface.set_stroke_style(Hsla::new(
            hue + 180.0,
            60.0,
            60.0,
            evolution.progress * 0.3,
        ));
        for [px, py] in positions {
            surface.begin_path();
            surface.arc(px, py, PARTICLE_RADIUS, 0.0, TAU);
            surface.stroke();
        }
    }
}

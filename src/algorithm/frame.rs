//! Frame driver: clock, composition and the mount/tick/teardown lifecycle

use crate::algorithm::field::{FieldSpec, render_field};
use crate::canvas::{Scoped, Surface};
use crate::io::configuration::{
    BACKGROUND_LIGHTNESS, BACKGROUND_SATURATION, CANVAS_HEIGHT, CANVAS_WIDTH,
    PRIMARY_FIELD_SCALE, SECONDARY_FIELD_OFFSET, SECONDARY_FIELD_ROTATION, SECONDARY_FIELD_SCALE,
    SECONDARY_TIME_RATE, TIME_STEP,
};
use crate::math::{Hsla, evolution_stage};
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Animation time, advanced by a fixed step once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Clock {
    time: f64,
}

impl Clock {
    /// A clock at time zero
    pub const fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Current time
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Advance by one frame step and return the new time
    pub fn advance(&mut self) -> f64 {
        self.time += TIME_STEP;
        self.time
    }
}

/// Background colour at `time`: a pale, slowly warming neutral
pub fn background_color(time: f64) -> Hsla {
    let evolution = evolution_stage(time);
    let hue = evolution
        .stage_value()
        .mul_add(30.0, evolution.progress * 30.0)
        % 60.0;
    Hsla::opaque(hue, BACKGROUND_SATURATION, BACKGROUND_LIGHTNESS)
}

/// A field together with the rotation of the whole surface it is drawn under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPlacement {
    /// Rotation about the canvas centre in radians
    pub rotation: f64,
    /// The field drawn under that rotation
    pub spec: FieldSpec,
}

/// The three fields of a frame: the primary field and two rotated companions
///
/// The companions' time offsets are `+(0.3t + π)` and `-(0.3t - π)`.
pub fn composition(time: f64) -> [FieldPlacement; 3] {
    let drift = time * SECONDARY_TIME_RATE;
    [
        FieldPlacement {
            rotation: 0.0,
            spec: FieldSpec::new([0.0, 0.0], PRIMARY_FIELD_SCALE, 0.0),
        },
        FieldPlacement {
            rotation: SECONDARY_FIELD_ROTATION,
            spec: FieldSpec::new([0.0, -SECONDARY_FIELD_OFFSET], SECONDARY_FIELD_SCALE, drift + PI),
        },
        FieldPlacement {
            rotation: -SECONDARY_FIELD_ROTATION,
            spec: FieldSpec::new([0.0, SECONDARY_FIELD_OFFSET], SECONDARY_FIELD_SCALE, -(drift - PI)),
        },
    ]
}

/// Paint one complete frame at `time`, returning the number of tiles drawn
pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, time: f64) -> usize {
    let width = f64::from(surface.width());
    let height = f64::from(surface.height());

    surface.set_fill_style(background_color(time));
    surface.fill_rect(0.0, 0.0, width, height);

    let (cx, cy) = (width / 2.0, height / 2.0);
    composition(time)
        .into_iter()
        .map(|placement| {
            let mut rotated = Scoped::new(&mut *surface);
            rotated.translate(cx, cy);
            rotated.rotate(placement.rotation);
            rotated.translate(-cx, -cy);
            render_field(&mut *rotated, &placement.spec, time)
        })
        .sum()
}

/// An animation bound to (at most) one surface
///
/// [`Animation::mount`] attaches a surface and schedules the first frame,
/// each [`Animation::tick`] runs the scheduled frame and schedules the next,
/// and [`Animation::teardown`] cancels scheduling and releases the surface's
/// backing store.
#[derive(Debug, Clone)]
pub struct Animation<S: Surface> {
    clock: Clock,
    surface: Option<S>,
    scheduled: bool,
    frames: u64,
}

impl<S: Surface> Default for Animation<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Animation<S> {
    /// A detached animation with its clock at zero
    pub const fn new() -> Self {
        Self {
            clock: Clock::new(),
            surface: None,
            scheduled: false,
            frames: 0,
        }
    }

    /// Attach `surface`, size it to the canvas and schedule the first frame
    ///
    /// A previously mounted surface is torn down and dropped first.
    pub fn mount(&mut self, mut surface: S) {
        if self.surface.is_some() {
            self.teardown();
        }
        surface.resize(CANVAS_WIDTH, CANVAS_HEIGHT);
        self.surface = Some(surface);
        self.scheduled = true;
        debug!(width = CANVAS_WIDTH, height = CANVAS_HEIGHT, "animation mounted");
    }

    /// Run the scheduled frame, if any, and schedule the next one
    ///
    /// Returns `false` without drawing when nothing is scheduled or no
    /// surface is attached.
    pub fn tick(&mut self) -> bool {
        if !self.scheduled {
            return false;
        }
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let time = self.clock.advance();
        let tiles = render_frame(surface, time);
        self.frames += 1;
        trace!(frame = self.frames, time, tiles, "frame rendered");
        true
    }

    /// Advance the clock by `frames` steps without drawing
    pub fn fast_forward(&mut self, frames: u64) {
        for _ in 0..frames {
            self.clock.advance();
        }
    }

    /// Stop scheduling, clear the surface and release its backing store
    ///
    /// Safe to call any number of times, mounted or not.
    pub fn teardown(&mut self) {
        self.scheduled = false;
        self.clock = Clock::new();
        if let Some(surface) = self.surface.as_mut() {
            let width = f64::from(surface.width());
            let height = f64::from(surface.height());
            surface.clear_rect(0.0, 0.0, width, height);
            surface.resize(0, 0);
            debug!(frames = self.frames, "animation torn down");
        }
    }

    /// Current animation time
    pub const fn time(&self) -> f64 {
        self.clock.time()
    }

    /// Frames rendered since the animation was created
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Whether a frame is waiting to run
    pub const fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// The attached surface
    pub const fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Detach and return the surface, leaving nothing scheduled
    pub fn into_surface(self) -> Option<S> {
        self.surface
    }
}

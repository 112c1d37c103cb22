//! The drawing-surface contract and scoped state guard

use crate::canvas::state::CanvasState;
use crate::math::Hsla;
use std::ops::{Deref, DerefMut};

/// Immediate-mode 2D drawing surface
///
/// Backends supply the state storage and the four operations that touch
/// pixels (or their record of them); transform, style and path handling
/// are shared through [`CanvasState`].
pub trait Surface {
    /// Shared drawing state
    fn state(&self) -> &CanvasState;

    /// Mutable shared drawing state
    fn state_mut(&mut self) -> &mut CanvasState;

    /// Logical width of the surface
    fn width(&self) -> u32;

    /// Logical height of the surface
    fn height(&self) -> u32;

    /// Stroke the current path with the current stroke style and line width
    fn stroke(&mut self);

    /// Fill a rectangle in local coordinates with the current fill style
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Reset a rectangle in local coordinates to transparent
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Replace the backing store, discarding its contents and all state
    fn resize(&mut self, width: u32, height: u32);

    /// Push the current transform and styles
    fn save(&mut self) {
        self.state_mut().save();
    }

    /// Pop the most recently saved transform and styles
    fn restore(&mut self) {
        self.state_mut().restore();
    }

    /// Translate the local frame
    fn translate(&mut self, dx: f64, dy: f64) {
        self.state_mut().translate(dx, dy);
    }

    /// Rotate the local frame by `angle` radians
    fn rotate(&mut self, angle: f64) {
        self.state_mut().rotate(angle);
    }

    /// Discard the current path
    fn begin_path(&mut self) {
        self.state_mut().begin_path();
    }

    /// Start a new subpath
    fn move_to(&mut self, x: f64, y: f64) {
        self.state_mut().move_to(x, y);
    }

    /// Extend the current subpath with a straight line
    fn line_to(&mut self, x: f64, y: f64) {
        self.state_mut().line_to(x, y);
    }

    /// Add a clockwise arc around `(cx, cy)`
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.state_mut().arc(cx, cy, radius, start, end);
    }

    /// Set the colour used by [`Surface::stroke`]
    fn set_stroke_style(&mut self, color: Hsla) {
        self.state_mut().set_stroke_style(color);
    }

    /// Set the colour used by [`Surface::fill_rect`]
    fn set_fill_style(&mut self, color: Hsla) {
        self.state_mut().set_fill_style(color);
    }

    /// Set the stroke width in local units
    fn set_line_width(&mut self, width: f64) {
        self.state_mut().set_line_width(width);
    }
}

/// Saved surface state, restored when the guard is dropped
///
/// Dereferences to the surface so drawing continues through the guard.
/// Restoration happens on every exit path, early returns included.
pub struct Scoped<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> Scoped<'a, S> {
    /// Save the surface state until the returned guard drops
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for Scoped<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for Scoped<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for Scoped<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

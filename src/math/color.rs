//! HSLA colours with CSS semantics
//!
//! Hue wraps modulo 360 degrees, saturation and lightness are percentages
//! clamped to `[0, 100]` and alpha is clamped to `[0, 1]`, matching how a
//! browser interprets `hsla(h, s%, l%, a)`.

use std::fmt;

/// Colour in hue / saturation / lightness / alpha form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue in degrees (any real, wrapped when converted)
    pub hue: f64,
    /// Saturation in percent
    pub saturation: f64,
    /// Lightness in percent
    pub lightness: f64,
    /// Opacity in `[0, 1]`
    pub alpha: f64,
}

impl Hsla {
    /// Opaque black, the canvas default for both stroke and fill
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Build a colour from its four components
    pub const fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Build an opaque colour (`hsl(...)`)
    pub const fn opaque(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::new(hue, saturation, lightness, 1.0)
    }

    /// Hue normalised into `[0, 360)`
    pub fn normalized_hue(&self) -> f64 {
        let hue = self.hue.rem_euclid(360.0);
        if hue.is_finite() { hue } else { 0.0 }
    }

    /// Alpha clamped into `[0, 1]`
    pub fn clamped_alpha(&self) -> f64 {
        if self.alpha.is_nan() {
            0.0
        } else {
            self.alpha.clamp(0.0, 1.0)
        }
    }

    /// Convert to straight (non-premultiplied) RGBA with channels in `[0, 1]`
    pub fn to_rgba(&self) -> [f32; 4] {
        let s = clamp_percent(self.saturation);
        let l = clamp_percent(self.lightness);
        let h = self.normalized_hue() / 30.0;

        let chroma = s * l.min(1.0 - l);
        let channel = |n: f64| {
            let k = (n + h).rem_euclid(12.0);
            let m = (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            chroma.mul_add(-m, l) as f32
        };

        [
            channel(0.0),
            channel(8.0),
            channel(4.0),
            self.clamped_alpha() as f32,
        ]
    }

    /// Convert to 8-bit straight RGBA
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.to_rgba().map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// Copy of this colour with a different alpha
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        (value / 100.0).clamp(0.0, 1.0)
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.2}, {:.0}%, {:.0}%, {:.3})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

//! Two-dimensional affine transforms in canvas matrix form
//!
//! A transform maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`, the same
//! layout an HTML canvas uses for `setTransform(a, b, c, d, e, f)`. Operations
//! such as [`Transform::translate`] post-multiply, so they act in the current
//! local coordinate frame exactly like the canvas calls of the same name.

/// Affine transform with canvas component naming
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Horizontal scaling / rotation component
    pub a: f64,
    /// Vertical skew / rotation component
    pub b: f64,
    /// Horizontal skew / rotation component
    pub c: f64,
    /// Vertical scaling / rotation component
    pub d: f64,
    /// Horizontal translation
    pub e: f64,
    /// Vertical translation
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Pure uniform scale
    pub const fn scaling(factor: f64) -> Self {
        Self {
            a: factor,
            d: factor,
            ..Self::IDENTITY
        }
    }

    /// Apply `other` in this transform's local frame (`self * other`)
    pub fn then(&self, other: &Self) -> Self {
        Self {
            a: self.a.mul_add(other.a, self.c * other.b),
            b: self.b.mul_add(other.a, self.d * other.b),
            c: self.a.mul_add(other.c, self.c * other.d),
            d: self.b.mul_add(other.c, self.d * other.d),
            e: self.a.mul_add(other.e, self.c.mul_add(other.f, self.e)),
            f: self.b.mul_add(other.e, self.d.mul_add(other.f, self.f)),
        }
    }

    /// Translate the local frame
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        self.then(&Self {
            e: dx,
            f: dy,
            ..Self::IDENTITY
        })
    }

    /// Rotate the local frame by `angle` radians (clockwise on a y-down canvas)
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.then(&Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        })
    }

    /// Scale the local frame
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        self.then(&Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        })
    }

    /// Map a point from local to device coordinates
    pub fn apply(&self, point: [f64; 2]) -> [f64; 2] {
        let [x, y] = point;
        [
            self.a.mul_add(x, self.c.mul_add(y, self.e)),
            self.b.mul_add(x, self.d.mul_add(y, self.f)),
        ]
    }

    /// Determinant of the linear part
    pub fn determinant(&self) -> f64 {
        self.a.mul_add(self.d, -(self.b * self.c))
    }

    /// Inverse transform, if the matrix is not singular
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < f64::EPSILON || !det.is_finite() {
            return None;
        }
        Some(Self {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: self.c.mul_add(self.f, -(self.d * self.e)) / det,
            f: self.b.mul_add(self.e, -(self.a * self.f)) / det,
        })
    }

    /// Geometric mean scale, used to scale stroke widths
    pub fn scale_factor(&self) -> f64 {
        self.determinant().abs().sqrt()
    }
}

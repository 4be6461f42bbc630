use glam::Vec3;

/// A cubic Bezier curve in 3D space.
///
/// `v0` is the start point, `v3` the end point, `v1`/`v2` the control points.
/// The curve is immutable once built; a new one is generated for every run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezierCurve3 {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub v3: Vec3,
}

impl CubicBezierCurve3 {
    #[must_use]
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        Self { v0, v1, v2, v3 }
    }

    #[must_use]
    pub fn from_points(points: [Vec3; 4]) -> Self {
        let [v0, v1, v2, v3] = points;
        Self { v0, v1, v2, v3 }
    }

    /// Returns the four defining points in order.
    #[must_use]
    pub fn points(&self) -> [Vec3; 4] {
        [self.v0, self.v1, self.v2, self.v3]
    }

    /// Samples the curve at parameter `t` (Bernstein form).
    ///
    /// `t` is expected in `[0, 1]`; values outside extrapolate the polynomial.
    #[inline]
    #[must_use]
    pub fn get_point(&self, t: f32) -> Vec3 {
        let k = 1.0 - t;
        let b0 = k * k * k;
        let b1 = 3.0 * k * k * t;
        let b2 = 3.0 * k * t * t;
        let b3 = t * t * t;

        self.v0 * b0 + self.v1 * b1 + self.v2 * b2 + self.v3 * b3
    }

    /// Unit tangent at parameter `t`.
    ///
    /// Falls back to the chord direction when the derivative vanishes
    /// (coincident control points), and to `Vec3::ZERO` for a fully
    /// degenerate curve.
    #[must_use]
    pub fn get_tangent(&self, t: f32) -> Vec3 {
        let k = 1.0 - t;
        let d = (self.v1 - self.v0) * (3.0 * k * k)
            + (self.v2 - self.v1) * (6.0 * k * t)
            + (self.v3 - self.v2) * (3.0 * t * t);

        d.try_normalize()
            .or_else(|| (self.v3 - self.v0).try_normalize())
            .unwrap_or(Vec3::ZERO)
    }

    /// Returns `divisions + 1` points evenly spaced in parameter space,
    /// including both endpoints.
    #[must_use]
    pub fn get_points(&self, divisions: usize) -> Vec<Vec3> {
        if divisions == 0 {
            return vec![self.v0];
        }

        (0..=divisions)
            .map(|i| self.get_point(i as f32 / divisions as f32))
            .collect()
    }
}

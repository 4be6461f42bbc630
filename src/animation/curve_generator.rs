use glam::Vec3;
use rand::RngExt;

use crate::animation::curve::CubicBezierCurve3;
use crate::settings::PathSettings;

/// Produces the randomized arc a coin travels along.
///
/// The arc starts at the rest position, climbs to the apex control point and
/// then drifts outward while falling below the start height. `x` and `z` keep
/// the sign they were drawn with, so every arc leans away from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveGenerator {
    settings: PathSettings,
}

impl Default for CurveGenerator {
    fn default() -> Self {
        Self::new(PathSettings::default())
    }
}

impl CurveGenerator {
    #[must_use]
    pub fn new(settings: PathSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &PathSettings {
        &self.settings
    }

    /// Draws a new curve. Never fails.
    pub fn generate<R: RngExt>(&self, rng: &mut R) -> CubicBezierCurve3 {
        let s = &self.settings;
        let origin = s.origin();

        let mut x = rng.random_range(s.x_range.min..s.x_range.max);
        let mut z = rng.random_range(s.z_range.min..s.z_range.max);
        let apex = Vec3::new(x, s.apex_height, z);

        x = push_outward(x, s.spread_step);
        z = push_outward(z, s.spread_step);
        let shoulder = Vec3::new(x, s.shoulder_height, z);

        x = push_outward(x, s.spread_step);
        z = push_outward(z, s.spread_step);
        let landing = Vec3::new(x, s.landing_height, z);

        CubicBezierCurve3::new(origin, origin + apex, origin + shoulder, origin + landing)
    }
}

/// Moves `value` further from zero by `step`. Zero counts as negative.
#[inline]
fn push_outward(value: f32, step: f32) -> f32 {
    if value > 0.0 { value + step } else { value - step }
}

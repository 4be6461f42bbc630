use rand::RngExt;

use crate::animation::curve::CubicBezierCurve3;
use crate::animation::curve_generator::CurveGenerator;
use crate::scene::coin::RestPose;
use crate::scene::transform::Transform;
use crate::settings::MotionSettings;

/// Result of advancing a single driver by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The driver is not animating; nothing changed.
    Idle,
    /// The coin moved along its curve.
    Moved,
    /// The coin reached the end of its curve this frame. Reported once.
    Finished,
}

/// Curve and rates drawn for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Flight {
    curve: CubicBezierCurve3,
    speed: f32,
    rotation_rate: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum DriverState {
    /// Never started.
    #[default]
    Unstarted,
    Flying(Flight),
    /// Finished or stopped. Keeps the last flight for previews.
    Landed(Flight),
}

/// Per-coin animation state.
///
/// Owns the coin's curve, progress, speed and spin. It is advanced once per
/// frame by [`update`](Self::update) and never touches other coins, so drivers
/// may be updated in any order.
#[derive(Debug, Clone, Default)]
pub struct CoinDriver {
    state: DriverState,
    progress: f32,
}

impl CoinDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new run: fresh curve, speed and spin, progress back to 0.
    pub fn start<R: RngExt>(
        &mut self,
        generator: &CurveGenerator,
        motion: &MotionSettings,
        rng: &mut R,
    ) {
        let curve = generator.generate(rng);
        let speed = rng.random_range(motion.speed.min..motion.speed.max);
        let rotation_rate = rng.random_range(motion.rotation_rate.min..motion.rotation_rate.max);
        self.state = DriverState::Flying(Flight {
            curve,
            speed,
            rotation_rate,
        });
        self.progress = 0.0;
    }

    /// Goes idle and snaps the coin back to its rest pose.
    pub fn stop(&mut self, transform: &mut Transform, rest: &RestPose) {
        if let DriverState::Flying(flight) = self.state {
            self.state = DriverState::Landed(flight);
        }
        transform.position = rest.position;
        transform.rotation = rest.rotation;
    }

    /// Advances the coin by one frame.
    ///
    /// `step_scale` multiplies both speed and spin; it is `1.0` when the host
    /// steps strictly per frame. Negative or non-finite scales count as 0, so
    /// progress never moves backwards.
    pub fn update(&mut self, transform: &mut Transform, step_scale: f32) -> FrameOutcome {
        let DriverState::Flying(flight) = self.state else {
            return FrameOutcome::Idle;
        };
        let step_scale = if step_scale.is_finite() {
            step_scale.max(0.0)
        } else {
            0.0
        };

        if self.progress < 1.0 {
            transform.position = flight.curve.get_point(self.progress);
            transform.rotate_y(flight.rotation_rate * step_scale);
            self.progress += flight.speed * step_scale;
            FrameOutcome::Moved
        } else {
            self.state = DriverState::Landed(flight);
            self.progress = 0.0;
            FrameOutcome::Finished
        }
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, DriverState::Flying(_))
    }

    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Per-frame progress step of the current or most recent run, 0 before
    /// the first.
    #[inline]
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.flight().map_or(0.0, |f| f.speed)
    }

    #[inline]
    #[must_use]
    pub fn rotation_rate(&self) -> f32 {
        self.flight().map_or(0.0, |f| f.rotation_rate)
    }

    /// The curve of the current or most recent run.
    #[inline]
    #[must_use]
    pub fn curve(&self) -> Option<&CubicBezierCurve3> {
        self.flight().map(|f| &f.curve)
    }

    fn flight(&self) -> Option<&Flight> {
        match &self.state {
            DriverState::Unstarted => None,
            DriverState::Flying(flight) | DriverState::Landed(flight) => Some(flight),
        }
    }
}

use glam::{Affine3A, Vec3};

use crate::animation::driver::CoinDriver;
use crate::scene::transform::Transform;

/// Where a coin sits between runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestPose {
    pub position: Vec3,
    /// Euler angles (XYZ order, radians).
    pub rotation: Vec3,
}

impl Default for RestPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }
}

/// A single coin: spatial state, visibility and its animation driver.
///
/// Coins are hidden while idle and shown for the duration of a run.
#[derive(Debug, Clone)]
pub struct Coin {
    pub transform: Transform,
    pub visible: bool,
    rest: RestPose,
    driver: CoinDriver,
}

impl Coin {
    /// Creates a hidden coin at its rest pose.
    #[must_use]
    pub fn new(rest: RestPose, scale: f32) -> Self {
        let mut transform = Transform::new().with_scale(scale);
        transform.position = rest.position;
        transform.rotation = rest.rotation;

        Self {
            transform,
            visible: false,
            rest,
            driver: CoinDriver::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn rest(&self) -> &RestPose {
        &self.rest
    }

    #[inline]
    #[must_use]
    pub fn driver(&self) -> &CoinDriver {
        &self.driver
    }

    /// Splits the coin into the pieces a driver update needs.
    #[inline]
    pub(crate) fn parts_mut(&mut self) -> (&mut CoinDriver, &mut Transform, &RestPose) {
        (&mut self.driver, &mut self.transform, &self.rest)
    }

    /// Refreshes and returns the model matrix.
    pub fn model_matrix(&mut self) -> Affine3A {
        self.transform.update_local_matrix();
        *self.transform.local_matrix()
    }
}

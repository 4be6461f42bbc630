//! Scene Objects
//!
//! The per-object data a renderer reads every frame:
//! - [`Transform`]: position, Euler rotation and scale with a cached matrix
//! - [`Coin`]: transform, visibility, rest pose and animation driver

pub mod coin;
pub mod transform;

pub use coin::{Coin, RestPose};
pub use transform::Transform;

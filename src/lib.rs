#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! # Coin Burst
//!
//! Frame-driven simulation core for a "coin burst": one trigger throws a batch
//! of coins along randomized cubic Bezier arcs, each coin spinning about its
//! Y axis, with a selectable color theme shared by every coin.
//!
//! The library owns the animation state and batch bookkeeping. Drawing is left
//! to the host, which calls [`CoinBurst::update`] once per rendered frame and
//! reads back transforms, visibility and material parameters.
//!
//! ```rust,ignore
//! use coin_burst::{BurstSettings, CoinBurst};
//!
//! let mut burst = CoinBurst::new(BurstSettings::default())?;
//! burst.trigger();
//! while burst.is_animating() {
//!     burst.update(None);
//! }
//! ```

pub mod animation;
pub mod errors;
pub mod resources;
pub mod scene;
pub mod settings;
pub mod utils;

pub use animation::{
    BatchCoordinator, BatchPhase, BurstEvent, CoinBurst, CoinDriver, CubicBezierCurve3,
    CurveGenerator, FrameOutcome, RunSummary,
};
pub use errors::{CoinBurstError, Result};
pub use resources::{Color, ColorOption, GlossyMaterial, ThemePalette};
pub use scene::{Coin, RestPose, Transform};
pub use settings::{BurstSettings, MotionSettings, PathSettings, RangeSetting};

//! Animation
//!
//! - [`CubicBezierCurve3`] / [`CurveGenerator`]: the randomized travel paths
//! - [`CoinDriver`]: per-coin progress along its path
//! - [`BatchCoordinator`]: detects when every coin of a run has finished
//! - [`CoinBurst`]: ties them together behind `trigger` / `update`

pub mod batch;
pub mod curve;
pub mod curve_generator;
pub mod driver;
pub mod system;

pub use batch::{BatchCoordinator, BatchPhase, RunSummary};
pub use curve::CubicBezierCurve3;
pub use curve_generator::CurveGenerator;
pub use driver::{CoinDriver, FrameOutcome};
pub use system::{BurstEvent, CoinBurst};

//! Utility Module
//!
//! - [`FrameClock`]: turns host frames into simulation steps

pub mod frame_clock;

pub use frame_clock::{FrameClock, StepMode, clamp_step};

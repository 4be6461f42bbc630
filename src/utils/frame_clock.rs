#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// How a [`FrameClock`] turns frames into simulation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Every frame is one reference step (`CoinBurst::update(None)`).
    Fixed,
    /// Every frame advances by the measured wall-clock time, clamped.
    Measured,
}

/// Clamps a frame delta (seconds) to `0..=max_step`.
///
/// Non-finite deltas become 0.
#[must_use]
pub fn clamp_step(dt: f32, max_step: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, max_step.max(0.0))
    } else {
        0.0
    }
}

/// Frame clock for host loops.
///
/// Produces the `dt` argument of
/// [`CoinBurst::update`](crate::animation::CoinBurst::update) for each frame
/// and keeps per-run frame and wall-clock totals for reporting.
#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: StepMode,
    max_step: f32,
    started: Instant,
    last_frame: Instant,
    frames: u64,
}

impl FrameClock {
    /// Largest measured step, in seconds. Longer stalls count as this much.
    pub const DEFAULT_MAX_STEP: f32 = 0.1;

    #[must_use]
    pub fn fixed() -> Self {
        Self::with_mode(StepMode::Fixed, Self::DEFAULT_MAX_STEP)
    }

    /// A clock that reports measured deltas, capped at `max_step` seconds.
    /// A non-positive or non-finite cap falls back to
    /// [`DEFAULT_MAX_STEP`](Self::DEFAULT_MAX_STEP).
    #[must_use]
    pub fn measured(max_step: f32) -> Self {
        let max_step = if max_step.is_finite() && max_step > 0.0 {
            max_step
        } else {
            Self::DEFAULT_MAX_STEP
        };
        Self::with_mode(StepMode::Measured, max_step)
    }

    fn with_mode(mode: StepMode, max_step: f32) -> Self {
        let now = Instant::now();
        Self {
            mode,
            max_step,
            started: now,
            last_frame: now,
            frames: 0,
        }
    }

    /// Marks the start of a frame and returns the step to simulate.
    pub fn next_step(&mut self) -> Option<f32> {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;

        match self.mode {
            StepMode::Fixed => None,
            StepMode::Measured => Some(clamp_step(delta.as_secs_f32(), self.max_step)),
        }
    }

    /// Restarts the frame and time totals, e.g. at the start of a run.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.started = now;
        self.last_frame = now;
        self.frames = 0;
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn max_step(&self) -> f32 {
        self.max_step
    }

    /// Frames seen since creation or the last [`reset`](Self::reset).
    #[inline]
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Sleeps off whatever is left of a frame of length `frame`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pace(&self, frame: Duration) {
        if let Some(rest) = frame.checked_sub(self.last_frame.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

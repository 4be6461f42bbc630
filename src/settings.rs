//! Burst Settings
//!
//! Everything that shapes a run lives in [`BurstSettings`]: the number of
//! coins, how fast they travel and spin, the geometry of their arcs and the
//! color palette. Every field has a default, so a settings file only needs to
//! name what it changes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use coin_burst::settings::BurstSettings;
//!
//! // Defaults: 50 coins, speed in [0.005, 0.025), spin in [0, 0.2)
//! let settings = BurstSettings::default();
//!
//! // Reproducible run with fewer coins
//! let settings = BurstSettings {
//!     coin_count: 10,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! // From JSON, missing keys fall back to defaults
//! let settings = BurstSettings::from_json_str(r#"{ "coin_count": 20 }"#)?;
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{CoinBurstError, Result};
use crate::resources::color::Color;
use crate::resources::theme::{ColorOption, default_color_options};

// ---------------------------------------------------------------------------
// RangeSetting
// ---------------------------------------------------------------------------

/// A half-open sampling interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSetting {
    pub min: f32,
    pub max: f32,
}

impl RangeSetting {
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value < self.max
    }

    /// Rejects empty, inverted and non-finite ranges.
    fn validate(&self, name: &'static str) -> Result<()> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(CoinBurstError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// MotionSettings
// ---------------------------------------------------------------------------

/// Per-coin speed and spin, drawn fresh on every run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Progress added along the curve per frame.
    pub speed: RangeSetting,
    /// Radians added to the Y rotation per frame.
    pub rotation_rate: RangeSetting,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            speed: RangeSetting::new(0.005, 0.025),
            rotation_rate: RangeSetting::new(0.0, 0.2),
        }
    }
}

// ---------------------------------------------------------------------------
// PathSettings
// ---------------------------------------------------------------------------

/// Shape of the randomized arcs produced by
/// [`CurveGenerator`](crate::animation::CurveGenerator).
///
/// The first control point is `(x, apex_height, z)` with `x` and `z` drawn
/// from their ranges. Each following point pushes `x` and `z` outward by
/// `spread_step`, first at `shoulder_height`, then at `landing_height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Start point of every curve; also the coins' rest position.
    pub origin: [f32; 3],
    pub x_range: RangeSetting,
    pub z_range: RangeSetting,
    pub apex_height: f32,
    pub shoulder_height: f32,
    pub landing_height: f32,
    pub spread_step: f32,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            x_range: RangeSetting::new(-1.0, 1.0),
            z_range: RangeSetting::new(0.0, 4.0),
            apex_height: 7.0,
            shoulder_height: 5.0,
            landing_height: -5.0,
            spread_step: 2.0,
        }
    }
}

impl PathSettings {
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        Vec3::from_array(self.origin)
    }
}

// ---------------------------------------------------------------------------
// BurstSettings
// ---------------------------------------------------------------------------

/// Top-level configuration for a [`CoinBurst`](crate::animation::CoinBurst).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstSettings {
    /// Number of coins thrown per run.
    pub coin_count: usize,
    /// Uniform scale applied to every coin.
    pub coin_scale: f32,
    pub motion: MotionSettings,
    pub path: PathSettings,
    /// Frame rate the per-frame speeds are tuned for. Only used when the host
    /// passes a real delta time to `update`.
    pub reference_fps: f32,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Theme colors; the first entry is active at startup.
    pub palette: Vec<ColorOption>,
}

impl Default for BurstSettings {
    fn default() -> Self {
        Self {
            coin_count: 50,
            coin_scale: 0.2,
            motion: MotionSettings::default(),
            path: PathSettings::default(),
            reference_fps: 60.0,
            seed: None,
            palette: default_color_options(),
        }
    }
}

impl BurstSettings {
    /// Parses settings from JSON and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads a JSON settings file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json_str(&text)?;
        log::info!(
            "Loaded burst settings from {} ({} coins)",
            path.as_ref().display(),
            settings.coin_count
        );
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every range, scalar and palette color.
    ///
    /// `coin_count == 0` is accepted: such a run completes on trigger.
    pub fn validate(&self) -> Result<()> {
        self.motion.speed.validate("motion.speed")?;
        if self.motion.speed.min <= 0.0 {
            return Err(CoinBurstError::InvalidRange {
                name: "motion.speed",
                min: self.motion.speed.min,
                max: self.motion.speed.max,
            });
        }
        self.motion.rotation_rate.validate("motion.rotation_rate")?;
        self.path.x_range.validate("path.x_range")?;
        self.path.z_range.validate("path.z_range")?;

        let scalars = [
            ("path.apex_height", self.path.apex_height),
            ("path.shoulder_height", self.path.shoulder_height),
            ("path.landing_height", self.path.landing_height),
            ("path.spread_step", self.path.spread_step),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(CoinBurstError::InvalidSetting(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if !self.path.origin.iter().all(|c| c.is_finite()) {
            return Err(CoinBurstError::InvalidSetting(format!(
                "path.origin must be finite, got {:?}",
                self.path.origin
            )));
        }
        if !(self.coin_scale.is_finite() && self.coin_scale > 0.0) {
            return Err(CoinBurstError::InvalidSetting(format!(
                "coin_scale must be positive, got {}",
                self.coin_scale
            )));
        }
        if !(self.reference_fps.is_finite() && self.reference_fps > 0.0) {
            return Err(CoinBurstError::InvalidSetting(format!(
                "reference_fps must be positive, got {}",
                self.reference_fps
            )));
        }

        for option in &self.palette {
            Color::from_hex(&option.value)?;
        }

        Ok(())
    }
}

//! Error Types
//!
//! The simulation itself never fails: curves, random draws and frame steps are
//! all generated internally. Errors only surface at the boundaries where
//! outside data enters the crate:
//! - Loading and validating [`BurstSettings`](crate::settings::BurstSettings)
//! - Parsing palette colors
//! - Selecting a theme by name
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, CoinBurstError>`.

use thiserror::Error;

/// The main error type for the coin burst crate.
#[derive(Error, Debug)]
pub enum CoinBurstError {
    // ========================================================================
    // Theme & Color Errors
    // ========================================================================
    /// A color string was not in `#rrggbb` form.
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    /// No palette entry carries the requested title.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// A sampling range is empty, inverted or out of its allowed domain.
    #[error("Invalid range for {name}: [{min}, {max})")]
    InvalidRange {
        /// Setting name
        name: &'static str,
        /// Lower bound (inclusive)
        min: f32,
        /// Upper bound (exclusive)
        max: f32,
    },

    /// A scalar setting holds an unusable value.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    // ========================================================================
    // I/O & Parsing Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, CoinBurstError>`.
pub type Result<T> = std::result::Result<T, CoinBurstError>;

//! Shared Resources
//!
//! Data shared by every coin rather than owned by one:
//! - [`Color`]: sRGB color with `#rrggbb` parsing
//! - [`GlossyMaterial`]: Phong parameters with a change version
//! - [`ThemePalette`]: named theme colors and the active selection

pub mod color;
pub mod material;
pub mod theme;

pub use color::Color;
pub use material::GlossyMaterial;
pub use theme::{ColorOption, DEFAULT_COIN_COLOR, ThemePalette, default_color_options};

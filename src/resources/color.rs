use glam::{Vec3, Vec4};

use crate::errors::{CoinBurstError, Result};

/// An sRGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional, hex digits are
    /// case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoinBurstError::InvalidColor(hex.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| CoinBurstError::InvalidColor(hex.to_string()))?;

        Ok(Self::from_u32(value))
    }

    /// Builds a color from a `0xRRGGBB` integer.
    #[must_use]
    pub fn from_u32(value: u32) -> Self {
        let channel = |shift: u32| ((value >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Formats as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    #[inline]
    #[must_use]
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// RGBA with full opacity.
    #[inline]
    #[must_use]
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, 1.0)
    }
}

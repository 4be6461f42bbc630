use glam::{Vec3, Vec4};

use crate::resources::color::Color;

/// Phong parameters shared by every coin.
///
/// Only the diffuse color changes at runtime (theme switches). Emissive is
/// black and specular white, giving the coins a hard glossy highlight.
#[derive(Debug, Clone)]
pub struct GlossyMaterial {
    color: Color,
    emissive: Color,
    specular: Color,
    shininess: f32,
    /// Bumped on every effective change.
    version: u64,
}

impl GlossyMaterial {
    pub const DEFAULT_SHININESS: f32 = 100.0;

    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            emissive: Color::BLACK,
            specular: Color::WHITE,
            shininess: Self::DEFAULT_SHININESS,
            version: 0,
        }
    }

    /// Sets the diffuse color. Bumps the version only if the color differs.
    pub fn set_color(&mut self, color: Color) {
        if self.color != color {
            self.color = color;
            self.version = self.version.wrapping_add(1);
        }
    }

    pub fn set_shininess(&mut self, shininess: f32) {
        if self.shininess != shininess {
            self.shininess = shininess;
            self.version = self.version.wrapping_add(1);
        }
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Diffuse color as RGBA, the layout renderers upload.
    #[inline]
    #[must_use]
    pub fn color_vec4(&self) -> Vec4 {
        self.color.to_vec4()
    }

    #[inline]
    #[must_use]
    pub fn emissive(&self) -> Vec3 {
        self.emissive.to_vec3()
    }

    #[inline]
    #[must_use]
    pub fn specular(&self) -> Vec3 {
        self.specular.to_vec3()
    }

    #[inline]
    #[must_use]
    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}

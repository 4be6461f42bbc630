use serde::{Deserialize, Serialize};

use crate::errors::{CoinBurstError, Result};
use crate::resources::color::Color;

/// Color used when the palette is empty.
pub const DEFAULT_COIN_COLOR: &str = "#4e43f5";

/// A named theme color, e.g. `purple` / `#4e43f5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub title: String,
    pub value: String,
}

impl ColorOption {
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// The purple, pink and blue themes.
#[must_use]
pub fn default_color_options() -> Vec<ColorOption> {
    vec![
        ColorOption::new("purple", "#4e43f5"),
        ColorOption::new("pink", "#ff689f"),
        ColorOption::new("blue", "#48baff"),
    ]
}

/// The selectable themes and which one is active.
///
/// Colors are parsed once on construction, so selecting a theme cannot fail
/// on a malformed value.
#[derive(Debug, Clone)]
pub struct ThemePalette {
    options: Vec<(ColorOption, Color)>,
    active: Option<usize>,
}

impl ThemePalette {
    /// Builds a palette with the first option active.
    pub fn new(options: Vec<ColorOption>) -> Result<Self> {
        let options = options
            .into_iter()
            .map(|option| {
                let color = Color::from_hex(&option.value)?;
                Ok((option, color))
            })
            .collect::<Result<Vec<_>>>()?;

        let active = if options.is_empty() { None } else { Some(0) };
        Ok(Self { options, active })
    }

    /// Makes the option titled `title` active.
    ///
    /// An unknown title is an error and leaves the active theme unchanged.
    pub fn select(&mut self, title: &str) -> Result<&ColorOption> {
        let index = self
            .options
            .iter()
            .position(|(option, _)| option.title == title)
            .ok_or_else(|| CoinBurstError::UnknownTheme(title.to_string()))?;

        self.active = Some(index);
        Ok(&self.options[index].0)
    }

    /// Activates the option after the current one, wrapping around.
    /// Returns `None` for an empty palette.
    pub fn cycle(&mut self) -> Option<&ColorOption> {
        let next = self.active.map(|i| (i + 1) % self.options.len())?;
        self.active = Some(next);
        Some(&self.options[next].0)
    }

    #[must_use]
    pub fn active(&self) -> Option<&ColorOption> {
        self.active.map(|i| &self.options[i].0)
    }

    /// Color of the active option, or [`DEFAULT_COIN_COLOR`] when the palette
    /// is empty.
    #[must_use]
    pub fn active_color(&self) -> Color {
        match self.active {
            Some(i) => self.options[i].1,
            None => Color::from_u32(0x004e_43f5),
        }
    }

    /// Whether `title` is the active option; drives the selector's highlight.
    #[must_use]
    pub fn is_active(&self, title: &str) -> bool {
        self.active().is_some_and(|option| option.title == title)
    }

    pub fn options(&self) -> impl Iterator<Item = &ColorOption> {
        self.options.iter().map(|(option, _)| option)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming and its persisted preference.

use crate::app::persisted_state::PreferenceStore;
use crate::surface::Fill;
use crate::ui::design_tokens::palette;
use iced::{Color, Theme};

/// Preference key under which the theme is stored.
pub const THEME_KEY: &str = "theme";

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub border: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,
    pub info: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_500,

            brand_primary: palette::PRIMARY_500,
            border: palette::GRAY_300,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,

            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_300,

            brand_primary: palette::PRIMARY_400,
            border: palette::GRAY_700,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// Resolves a surface color token.
    #[must_use]
    pub fn fill(&self, fill: Fill) -> Color {
        match fill {
            Fill::Primary => self.brand_primary,
            Fill::Border => self.border,
            Fill::Info => self.info,
            Fill::Success => self.success,
            Fill::Error => self.error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parses a stored value. Unknown values fall back to [`ThemeMode::Light`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Name of the toggle icon: the mode a click switches to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "moon",
            ThemeMode::Dark => "sun",
        }
    }

    /// Reads the stored preference.
    pub fn load<P: PreferenceStore + ?Sized>(store: &P) -> Self {
        store
            .get(THEME_KEY)
            .map(|value| Self::from_name(&value))
            .unwrap_or_default()
    }

    pub fn persist<P: PreferenceStore + ?Sized>(self, store: &mut P) {
        store.set(THEME_KEY, self.as_str());
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

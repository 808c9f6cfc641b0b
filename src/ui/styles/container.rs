// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Colors come from the active [`ColorScheme`] rather than the Iced theme so
//! the page and the toasts agree on every semantic color.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Whole-window background.
pub fn page(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Alternating section band.
pub fn band(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Raised card (pricing plans, testimonials).
///
/// A featured card gets the brand color as a thicker border.
pub fn card(colors: ColorScheme, featured: bool) -> impl Fn(&Theme) -> container::Style {
    let (border_color, border_width, card_shadow) = if featured {
        (colors.brand_primary, border::WIDTH_MD, shadow::MD)
    } else {
        (colors.border, border::WIDTH_SM, shadow::SM)
    };

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: border_color,
            width: border_width,
            radius: radius::LG.into(),
        },
        shadow: card_shadow,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Translucent full-window layer shown while the easter egg celebrates.
pub fn celebration(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY,
            ..colors.brand_primary
        })),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Modal backdrop, black at `fade` times the backdrop opacity.
pub fn backdrop(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(
            Color::BLACK.scale_alpha(opacity::BACKDROP * fade),
        )),
        ..Default::default()
    }
}

/// Modal card fading along with its backdrop.
pub fn modal(colors: ColorScheme, fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_primary.scale_alpha(fade))),
        border: Border {
            color: colors.border.scale_alpha(fade),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(colors.text_primary.scale_alpha(fade)),
        ..Default::default()
    }
}

/// Dark stand-in for the demo video.
pub fn video_placeholder(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::GRAY_900.scale_alpha(fade))),
        text_color: Some(Color::WHITE.scale_alpha(fade)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

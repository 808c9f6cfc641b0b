// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: brand name and the theme toggle.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub theme: ThemeMode,
    pub colors: &'a ColorScheme,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleTheme,
}

/// Glyph drawn for a theme icon name.
#[must_use]
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "sun" => "☀",
        _ => "☾",
    }
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let brand = Text::new("Kutu")
        .size(typography::TITLE_MD)
        .color(ctx.colors.brand_primary);

    let toggle = button(Text::new(icon_glyph(ctx.theme.icon())).size(typography::TITLE_SM))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::ghost(ctx.colors.text_primary));

    let row = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::MD)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(toggle);

    let background = ctx.colors.surface_primary;
    let border = ctx.colors.border;
    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            border: Border {
                color: border,
                width: 1.0,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

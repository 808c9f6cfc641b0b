// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the demo modal found on the surface.

use super::widget::{BODY_CLASS, CLOSE_CLASS, CONTENT_CLASS, MODAL_CLASS, TITLE_CLASS};
use crate::surface::{Document, ElementId, Style, StyleProperty};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, mouse_area, opaque, Column, Container, Text};
use iced::{alignment, Element, Length};
use std::time::Duration;

/// Renders the modal layer, or `None` when no modal is on the surface.
///
/// Presses on the backdrop and on the close button come back as their
/// element ids; presses inside the card are swallowed.
pub fn view<'a>(
    doc: &'a Document,
    now: Duration,
    colors: &ColorScheme,
) -> Option<Element<'a, ElementId>> {
    let backdrop = doc.first(MODAL_CLASS)?;
    let content = doc
        .children(backdrop)
        .iter()
        .copied()
        .find(|child| doc.has_class(*child, CONTENT_CLASS))?;
    let fade = fade(doc, backdrop, now);

    let mut card = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(child_text(doc, content, TITLE_CLASS)).size(typography::TITLE_MD))
        .push(
            Container::new(Text::new("▶").size(typography::DISPLAY))
                .width(Length::Fill)
                .height(sizing::VIDEO_HEIGHT)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::video_placeholder(fade)),
        )
        .push(Text::new(child_text(doc, content, BODY_CLASS)).size(typography::BODY));

    if let Some(close) = child_with(doc, content, CLOSE_CLASS) {
        card = card.push(
            button(Text::new(doc.text(close).unwrap_or_default()))
                .on_press(close)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        );
    }

    let card = Container::new(card)
        .max_width(sizing::MODAL_WIDTH)
        .padding(spacing::XL)
        .style(styles::container::modal(colors.clone(), fade));

    let layer = Container::new(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .style(styles::container::backdrop(fade));

    Some(opaque(mouse_area(layer).on_press(backdrop)))
}

/// Opacity of the modal as shown at `now`.
pub(super) fn fade(doc: &Document, backdrop: ElementId, now: Duration) -> f32 {
    match doc.rendered(backdrop, StyleProperty::Opacity, now) {
        Some(Style::Opacity(value)) => value.clamp(0.0, 1.0),
        _ => 1.0,
    }
}

fn child_with(doc: &Document, parent: ElementId, class: &str) -> Option<ElementId> {
    doc.children(parent)
        .iter()
        .copied()
        .find(|child| doc.has_class(*child, class))
}

fn child_text<'a>(doc: &'a Document, parent: ElementId, class: &str) -> &'a str {
    child_with(doc, parent, class)
        .and_then(|child| doc.text(child))
        .unwrap_or_default()
}

// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the testimonial section found on the surface.

use super::widget::{DOTS_CLASS, DOT_CLASS};
use crate::surface::{Document, ElementId, Fill, Style, StyleProperty, Surface};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Class of a testimonial panel.
pub const CARD_CLASS: &str = "testimonial-card";

/// Class of the quote inside a panel.
pub const QUOTE_CLASS: &str = "testimonial-quote";

/// Class of the author line inside a panel.
pub const AUTHOR_CLASS: &str = "testimonial-author";

/// Renders the panel currently in the visible slot plus the dot row.
pub fn view<'a>(doc: &'a Document, colors: &ColorScheme) -> Element<'a, ElementId> {
    let visible = doc
        .query(CARD_CLASS)
        .into_iter()
        .find(|panel| in_visible_slot(doc, *panel));

    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    if let Some(panel) = visible {
        column = column.push(card(doc, panel, colors));
    }

    if let Some(row) = doc.first(DOTS_CLASS) {
        let dots = doc
            .children(row)
            .iter()
            .copied()
            .filter(|dot| doc.has_class(*dot, DOT_CLASS))
            .map(|dot| dot_button(doc, dot, colors));
        column = column.push(Row::with_children(dots).spacing(spacing::XS));
    }

    Container::new(column)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Whether a panel sits at offset zero. Panels with no transform at all
/// (an inert single-panel carousel) are visible as well.
fn in_visible_slot(doc: &Document, panel: ElementId) -> bool {
    match doc.style(panel, StyleProperty::Transform) {
        Some(Style::TranslateX(offset)) => offset.is_zero(),
        None => true,
        Some(_) => false,
    }
}

fn card<'a>(doc: &'a Document, panel: ElementId, colors: &ColorScheme) -> Element<'a, ElementId> {
    let content = Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(child_text(doc, panel, QUOTE_CLASS))
                .size(typography::BODY_LG)
                .color(colors.text_primary),
        )
        .push(
            Text::new(child_text(doc, panel, AUTHOR_CLASS))
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );

    Container::new(content)
        .max_width(sizing::FORM_WIDTH)
        .padding(spacing::XL)
        .style(styles::container::card(colors.clone(), false))
        .into()
}

fn child_text<'a>(doc: &'a Document, panel: ElementId, class: &str) -> &'a str {
    doc.children(panel)
        .iter()
        .find(|child| doc.has_class(**child, class))
        .and_then(|child| doc.text(*child))
        .unwrap_or_default()
}

/// A dot button, with its accessible label shown as a tooltip.
fn dot_button<'a>(doc: &'a Document, dot: ElementId, colors: &ColorScheme) -> Element<'a, ElementId> {
    let fill = match doc.style(dot, StyleProperty::Background) {
        Some(Style::Background(fill)) => fill,
        _ => Fill::Border,
    };

    let control = button(Space::new().width(sizing::DOT).height(sizing::DOT))
        .on_press(dot)
        .padding(0)
        .style(styles::button::dot(colors.fill(fill)));

    match doc.label(dot) {
        Some(label) => tooltip(
            control,
            Container::new(Text::new(label).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(styles::container::card(colors.clone(), false)),
            tooltip::Position::Top,
        )
        .gap(spacing::XXS)
        .into(),
        None => control.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{ElementSpec, Offset};

    #[test]
    fn only_zero_offset_panel_is_in_visible_slot() {
        let mut doc = Document::new();
        let a = doc.create(None, ElementSpec::new("div").class(CARD_CLASS));
        let b = doc.create(None, ElementSpec::new("div").class(CARD_CLASS));
        doc.set_style(a, Style::TranslateX(Offset::Percent(-100.0)));
        doc.set_style(b, Style::TranslateX(Offset::Percent(0.0)));

        assert!(!in_visible_slot(&doc, a));
        assert!(in_visible_slot(&doc, b));
    }

    #[test]
    fn labelled_dots_render() {
        let mut doc = Document::new();
        let row = doc.create(None, ElementSpec::new("div").class(DOTS_CLASS));
        let dot = doc.create(
            Some(row),
            ElementSpec::new("button")
                .class(DOT_CLASS)
                .label("Show testimonial 1"),
        );
        assert_eq!(doc.label(dot), Some("Show testimonial 1"));
        let _element = view(&doc, &ColorScheme::light());
    }

    #[test]
    fn untransformed_panel_is_visible() {
        let mut doc = Document::new();
        let only = doc.create(None, ElementSpec::new("div").class(CARD_CLASS));
        assert!(in_visible_slot(&doc, only));
    }
}

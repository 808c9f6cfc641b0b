// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the notification found on the surface.
//!
//! The view reads the [`Document`] rather than the `NotificationCenter`, so it
//! draws exactly what the center put on the surface, including the slide
//! transition between the off-screen and on-screen offsets. Pressing the close
//! button emits the button's [`ElementId`]; the host routes it back through
//! the center's delegated click handler.

use super::center::{CLOSE_CLASS, NOTIFICATION_CLASS};
use crate::config::TOAST_SLIDE_PX;
use crate::surface::{Document, ElementId, Fill, Offset, Style, StyleProperty, Surface};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, float, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme, Vector};
use std::time::Duration;

/// Toast rendering.
pub struct Toast;

impl Toast {
    /// Renders one toast element.
    pub fn view<'a>(
        doc: &'a Document,
        element: ElementId,
        colors: &ColorScheme,
    ) -> Element<'a, ElementId> {
        let background = match doc.style(element, StyleProperty::Background) {
            Some(Style::Background(fill)) => colors.fill(fill),
            _ => colors.fill(Fill::Info),
        };

        let message = Text::new(doc.text(element).unwrap_or_default())
            .size(typography::BODY_LG)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            });

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        let close = doc
            .children(element)
            .iter()
            .copied()
            .find(|child| doc.has_class(*child, CLOSE_CLASS));
        if let Some(close) = close {
            let close_button = button(
                Text::new(doc.text(close).unwrap_or("×"))
                    .size(typography::TITLE_MD)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::WHITE),
                    }),
            )
            .on_press(close)
            .padding(0)
            .style(close_button_style);

            content = match doc.label(close) {
                Some(label) => content.push(
                    tooltip(close_button, Text::new(label), tooltip::Position::Bottom)
                        .gap(spacing::XXS),
                ),
                None => content.push(close_button),
            };
        }

        Container::new(content)
            .max_width(sizing::TOAST_WIDTH)
            .padding([spacing::MD, spacing::LG])
            .style(move |_theme: &Theme| toast_container_style(background))
            .into()
    }

    /// Renders the toast layer top-right, each toast shifted by its slide
    /// offset at `now`.
    pub fn view_overlay<'a>(
        doc: &'a Document,
        now: Duration,
        colors: &ColorScheme,
    ) -> Element<'a, ElementId> {
        let toasts: Vec<Element<'a, ElementId>> = doc
            .query(NOTIFICATION_CLASS)
            .into_iter()
            .map(|id| -> Element<'a, ElementId> {
                let shift = slide_shift(doc, id, now);
                float(Self::view(doc, id, colors))
                    .translate(move |_bounds, _viewport| Vector::new(shift, 0.0))
                    .into()
            })
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(Column::with_children(toasts).spacing(spacing::XS))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(iced::Padding {
                top: sizing::TOAST_TOP,
                right: spacing::LG,
                bottom: 0.0,
                left: 0.0,
            })
            .into()
    }
}

/// Horizontal shift of a toast at `now`, in window pixels.
///
/// A full slide of `TOAST_SLIDE_PX` on the surface moves the toast past the
/// overlay margin, clear of the window edge.
pub fn slide_shift(doc: &Document, element: ElementId, now: Duration) -> f32 {
    let slide = match doc.rendered(element, StyleProperty::Transform, now) {
        Some(Style::TranslateX(Offset::Px(x))) => x,
        _ => 0.0,
    };
    slide / TOAST_SLIDE_PX * (sizing::TOAST_WIDTH + spacing::LG)
}

fn toast_container_style(background: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

fn close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_100,
        _ => palette::WHITE,
    };
    button::Style {
        background: None,
        text_color,
        border: iced::Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ElementSpec;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    const FULL_SHIFT: f32 = sizing::TOAST_WIDTH + spacing::LG;

    #[test]
    fn toast_container_style_uses_background() {
        let style = toast_container_style(palette::SUCCESS_500);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::SUCCESS_500))
        );
    }

    #[test]
    fn untransformed_toast_is_not_shifted() {
        let mut doc = Document::new();
        let toast = doc.create(None, ElementSpec::new("div").class(NOTIFICATION_CLASS));
        assert_eq!(slide_shift(&doc, toast, Duration::ZERO), 0.0);
    }

    #[test]
    fn toast_slides_in_over_transition() {
        let mut doc = Document::new();
        let toast = doc.create(None, ElementSpec::new("div").class(NOTIFICATION_CLASS));
        doc.set_style(toast, Style::Transition(ms(300)));
        doc.set_style(toast, Style::TranslateX(Offset::Px(TOAST_SLIDE_PX)));
        assert_eq!(slide_shift(&doc, toast, ms(50)), FULL_SHIFT);

        doc.advance_clock(ms(100));
        doc.set_style(toast, Style::TranslateX(Offset::Px(0.0)));

        assert_eq!(slide_shift(&doc, toast, ms(100)), FULL_SHIFT);
        assert_eq!(slide_shift(&doc, toast, ms(250)), FULL_SHIFT / 2.0);
        assert_eq!(slide_shift(&doc, toast, ms(400)), 0.0);
    }

    #[test]
    fn leaving_toast_is_still_drawn_mid_slide() {
        let mut doc = Document::new();
        let toast = doc.create(None, ElementSpec::new("div").class(NOTIFICATION_CLASS));
        doc.set_style(toast, Style::Transition(ms(300)));
        doc.set_style(toast, Style::TranslateX(Offset::Px(0.0)));

        doc.advance_clock(ms(5_000));
        doc.set_style(toast, Style::TranslateX(Offset::Px(TOAST_SLIDE_PX)));

        let shift = slide_shift(&doc, toast, ms(5_150));
        assert!(shift > 0.0 && shift < FULL_SHIFT);
        let _element = Toast::view_overlay(&doc, ms(5_150), &ColorScheme::light());
    }
}

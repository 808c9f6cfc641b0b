// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Static sections (hero, pricing, contact form) are plain Iced widgets. The
//! testimonial carousel, the toast and the demo modal are drawn from the
//! page's surface, and presses on them come back as [`Message::Clicked`].

use super::Message;
use crate::app::persisted_state::PreferenceStore;
use crate::page::LandingPage;
use crate::surface::Document;
use crate::ui::carousel;
use crate::ui::demo_modal;
use crate::ui::contact_form::{ContactForm, Subject};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::pricing::Plan;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, scrollable, text_input, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Element, Length};

/// Renders the whole page with the modal and toast layers on top.
pub fn view<P: PreferenceStore>(page: &LandingPage<Document, P>) -> Element<'_, Message> {
    let theme = page.theme();
    let colors = theme.colors();
    let doc = page.surface();
    let now = page.now();

    let navbar = navbar::view(NavbarViewContext {
        theme,
        colors: &colors,
    })
    .map(|navbar::Message::ToggleTheme| Message::ToggleTheme);

    let sections = Column::new()
        .push(hero(&colors))
        .push(pricing(&colors))
        .push(testimonials(doc, &colors))
        .push(contact(page.contact(), &colors))
        .push(footer(&colors));

    let body = Column::new()
        .push(navbar)
        .push(scrollable(sections).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page(colors.clone())),
    );

    if let Some(modal) = demo_modal::view(doc, now, &colors) {
        layers = layers.push(modal.map(Message::Clicked));
    }
    layers = layers.push(Toast::view_overlay(doc, now, &colors).map(Message::Clicked));

    if page.is_celebrating() {
        layers = layers.push(celebration(&colors));
    }

    layers.into()
}

fn section<'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
    banded: Option<&ColorScheme>,
) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_WIDTH)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(content);

    let container = Container::new(column)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding([spacing::XXL, spacing::LG]);

    match banded {
        Some(colors) => container
            .style(styles::container::band(colors.clone()))
            .into(),
        None => container.into(),
    }
}

fn hero<'a>(colors: &ColorScheme) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Organize your bookmarks, effortlessly").size(typography::DISPLAY))
        .push(
            Text::new("Save, tag and sync every link across all your devices.")
                .size(typography::TITLE_SM)
                .color(colors.text_secondary),
        )
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(
                    button(Text::new(Plan::Free.action()))
                        .on_press(Message::ChoosePlan(Plan::Free))
                        .padding([spacing::SM, spacing::LG])
                        .style(styles::button::primary),
                )
                .push(
                    button(Text::new("Watch Demo"))
                        .on_press(Message::OpenDemo)
                        .padding([spacing::SM, spacing::LG])
                        .style(styles::button::unselected),
                ),
        );

    Container::new(column)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding([spacing::XXL * 2.0, spacing::LG])
        .into()
}

fn pricing<'a>(colors: &ColorScheme) -> Element<'a, Message> {
    let cards = Plan::ALL.into_iter().map(|plan| plan_card(plan, colors));
    section(
        "Simple, transparent pricing",
        Row::with_children(cards).spacing(spacing::LG),
        Some(colors),
    )
}

fn plan_card<'a>(plan: Plan, colors: &ColorScheme) -> Element<'a, Message> {
    let features = plan.features().iter().map(|feature| -> Element<'a, Message> {
        Text::new(format!("✓ {feature}"))
            .size(typography::BODY)
            .color(colors.text_secondary)
            .into()
    });

    let column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(plan.title()).size(typography::TITLE_MD))
        .push(
            Text::new(plan.price())
                .size(typography::TITLE_LG)
                .color(colors.brand_primary),
        )
        .push(Column::with_children(features).spacing(spacing::XS))
        .push(Space::new().height(Length::Fill))
        .push(
            button(
                Container::new(Text::new(plan.action()))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .on_press(Message::ChoosePlan(plan))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::button::primary),
        );

    Container::new(column)
        .width(sizing::CARD_WIDTH)
        .height(Length::Shrink)
        .padding(spacing::LG)
        .style(styles::container::card(colors.clone(), plan.is_featured()))
        .into()
}

fn testimonials<'a>(doc: &'a Document, colors: &ColorScheme) -> Element<'a, Message> {
    section(
        "What our users say",
        carousel::view(doc, colors).map(Message::Clicked),
        None,
    )
}

fn contact<'a>(form: &'a ContactForm, colors: &ColorScheme) -> Element<'a, Message> {
    let subjects = Subject::ALL.into_iter().map(|subject| -> Element<'a, Message> {
        let style = if form.subject == Some(subject) {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(subject.label()).size(typography::BODY))
            .on_press(Message::SubjectSelected(subject))
            .padding([spacing::XXS, spacing::SM])
            .style(style)
            .into()
    });

    let column = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(
            text_input("Your name", &form.name)
                .on_input(Message::NameChanged)
                .padding(spacing::SM)
                .size(typography::BODY_LG),
        )
        .push(
            text_input("you@example.com", &form.email)
                .on_input(Message::EmailChanged)
                .padding(spacing::SM)
                .size(typography::BODY_LG),
        )
        .push(
            Text::new("Subject")
                .size(typography::BODY)
                .color(colors.text_secondary),
        )
        .push(Row::with_children(subjects).spacing(spacing::XS))
        .push(
            text_input("How can we help?", &form.message)
                .on_input(Message::MessageChanged)
                .on_submit(Message::SubmitContact)
                .padding(spacing::SM)
                .size(typography::BODY_LG),
        )
        .push(
            button(Text::new("Send Message"))
                .on_press(Message::SubmitContact)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        );

    section("Get in touch", column, Some(colors))
}

fn footer<'a>(colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(
        Text::new("© Kutu. All rights reserved.")
            .size(typography::CAPTION)
            .color(colors.text_secondary),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .padding(spacing::LG)
    .into()
}

fn celebration<'a>(colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(Text::new("🎉").size(typography::DISPLAY * 2.0))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::celebration(colors.clone()))
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Placeholder demo video modal opened from the hero section.

mod view;
mod widget;

pub use view::view;
pub use widget::{
    DemoModal, Message, ModalPhase, ANNOUNCEMENT, BODY, BODY_CLASS, CLOSE_CLASS, CONTENT_CLASS,
    MODAL_CLASS, PLACEHOLDER_CLASS, TITLE, TITLE_CLASS,
};

// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel.
//!
//! Panels sit side by side; panel `i` is shifted by `(i - active) * 100%` so
//! only the active one occupies the visible slot. One dot per panel mirrors
//! the active index and selects its panel when pressed. A repeating timer
//! advances to the next panel, wrapping after the last, and is never paused.

mod view;
mod widget;

pub use view::{view, AUTHOR_CLASS, CARD_CLASS, QUOTE_CLASS};
pub use widget::{interval_from_config, Carousel, Message, DOTS_CLASS, DOT_CLASS};

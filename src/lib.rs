// SPDX-License-Identifier: MPL-2.0
//! `kutu_landing` is the interactive layer of the Kutu landing page, rendered
//! as a desktop window with the Iced GUI framework.
//!
//! The two stateful widgets, a single-toast notification center and a
//! testimonial carousel, are written against small collaborator traits (a
//! render [`surface`] and a [`timer`] service) so they can be driven and
//! tested without a window.

pub mod app;
pub mod config;
pub mod error;
pub mod page;
pub mod surface;
pub mod timer;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Interactive components of the landing page and their rendering.
//!
//! Components follow the Elm-style "state down, messages up" pattern. The
//! stateful widgets mutate the render surface only through the
//! [`crate::surface::Surface`] trait and schedule work only through the
//! [`crate::timer::TimerService`] trait; their `view` helpers read the
//! resulting document back for Iced.
//!
//! # Widgets
//!
//! - [`notifications`] - Single toast with enter/exit choreography
//! - [`carousel`] - Rotating testimonials with dot indicators
//! - [`demo_modal`] - Placeholder demo video with fade in and out
//!
//! # Page glue
//!
//! - [`contact_form`] - Client-side contact form validation
//! - [`pricing`] - Plan cards and their acknowledgements
//! - [`easter_egg`] - Konami code detector
//! - [`navbar`] - Brand and theme toggle
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode and its persisted preference

pub mod carousel;
pub mod contact_form;
pub mod demo_modal;
pub mod design_tokens;
pub mod easter_egg;
pub mod navbar;
pub mod notifications;
pub mod pricing;
pub mod styles;
pub mod theming;

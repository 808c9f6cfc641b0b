// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page sections.

pub mod button;
pub mod container;

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::surface::ElementId;
use crate::ui::contact_form::Subject;
use crate::ui::easter_egg::Key;
use crate::ui::pricing::Plan;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// An element rendered from the surface was pressed.
    Clicked(ElementId),
    /// A key press that may feed the easter egg.
    KeyPressed(Key),
    /// Periodic tick driving the page timers.
    Tick(Instant),
    ToggleTheme,
    ChoosePlan(Plan),
    /// Hero "Watch Demo" button.
    OpenDemo,
    NameChanged(String),
    EmailChanged(String),
    SubjectSelected(Subject),
    MessageChanged(String),
    SubmitContact,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional data directory override (for the preference file).
    /// Takes precedence over `KUTU_LANDING_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `KUTU_LANDING_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional `tracing` filter overriding `[logging] level`.
    /// `RUST_LOG` still wins over both.
    pub log_level: Option<String>,
}

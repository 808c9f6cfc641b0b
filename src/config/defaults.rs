// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast entrance delay, transition and display time
//! - **Carousel**: Automatic advance interval
//! - **Demo modal**: Fade timings
//! - **Logging**: Default log filter

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay before a new toast slides in, so the renderer registers the
/// off-screen layout first (milliseconds).
pub const DEFAULT_ENTER_DELAY_MS: u64 = 100;

/// Minimum entrance delay (milliseconds).
pub const MIN_ENTER_DELAY_MS: u64 = 0;

/// Maximum entrance delay (milliseconds).
pub const MAX_ENTER_DELAY_MS: u64 = 1_000;

/// Slide in/out transition duration (milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Minimum transition duration (milliseconds).
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum transition duration (milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2_000;

/// Time from `show()` until the toast dismisses itself (milliseconds).
pub const DEFAULT_DISPLAY_MS: u64 = 5_000;

/// Minimum display time (milliseconds).
pub const MIN_DISPLAY_MS: u64 = 1_000;

/// Maximum display time (milliseconds).
pub const MAX_DISPLAY_MS: u64 = 60_000;

/// Horizontal distance a toast travels when sliding in and out (pixels).
pub const TOAST_SLIDE_PX: f32 = 400.0;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Interval between automatic carousel advances (milliseconds).
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5_000;

/// Minimum carousel interval (milliseconds).
pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 1_000;

/// Maximum carousel interval (milliseconds).
pub const MAX_CAROUSEL_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Demo Modal
// ==========================================================================

/// Delay before the demo modal starts fading in (milliseconds).
pub const DEMO_FADE_IN_DELAY_MS: u64 = 100;

/// Demo modal fade duration, in and out (milliseconds).
pub const DEMO_FADE_MS: u64 = 300;

// ==========================================================================
// Easter Egg
// ==========================================================================

/// How long the celebration lasts once the secret sequence is entered
/// (milliseconds).
pub const CELEBRATION_MS: u64 = 10_000;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

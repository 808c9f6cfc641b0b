// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! A single transient message slides in from the right edge, stays for a
//! fixed time and slides out again. Showing a new message replaces the
//! current one immediately; there is no queue.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Kind` and the animation `Phase`
//! - [`center`] - `NotificationCenter` owning the lifecycle and its timers
//! - [`toast`] - Iced rendering of toast elements found on the surface
//!
//! # Usage
//!
//! ```ignore
//! let mut center = NotificationCenter::new(NotificationTiming::default());
//! center.show(&mut surface, &mut timers, "Message sent!", Kind::Success);
//!
//! // Route timer events back as they come due.
//! center.update(&mut surface, &mut timers, message);
//! ```

mod center;
mod notification;
mod toast;

pub use center::{
    Message as NotificationMessage, NotificationCenter, NotificationTiming, CLOSE_CLASS,
    NOTIFICATION_CLASS,
};
pub use notification::{Kind, Notification, NotificationId, Phase};
pub use toast::Toast;

// SPDX-License-Identifier: MPL-2.0
//! Pricing plans and the acknowledgement each call-to-action produces.

use crate::ui::notifications::Kind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Free,
    Trial,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Trial, Plan::Enterprise];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Trial => "Premium",
            Plan::Enterprise => "Enterprise",
        }
    }

    #[must_use]
    pub fn price(self) -> &'static str {
        match self {
            Plan::Free => "$0",
            Plan::Trial => "$4.99/mo",
            Plan::Enterprise => "Custom",
        }
    }

    #[must_use]
    pub fn features(self) -> &'static [&'static str] {
        match self {
            Plan::Free => &[
                "Up to 1,000 bookmarks",
                "Basic categorization",
                "Browser extension",
            ],
            Plan::Trial => &[
                "Unlimited bookmarks",
                "Cross-platform sync",
                "End-to-end encryption",
            ],
            Plan::Enterprise => &["Team workspaces", "SSO integration", "Priority support"],
        }
    }

    /// Label of the plan's button.
    #[must_use]
    pub fn action(self) -> &'static str {
        match self {
            Plan::Free => "Get Started Free",
            Plan::Trial => "Start Free Trial",
            Plan::Enterprise => "Contact Sales",
        }
    }

    /// The plan highlighted on the page.
    #[must_use]
    pub fn is_featured(self) -> bool {
        self == Plan::Trial
    }

    /// Notification shown when the plan's button is pressed.
    #[must_use]
    pub fn acknowledgement(self) -> (&'static str, Kind) {
        match self {
            Plan::Free => (
                "Free plan activated! Start organizing your bookmarks.",
                Kind::Success,
            ),
            Plan::Trial => (
                "Premium trial started! Enjoy all features for 14 days.",
                Kind::Success,
            ),
            Plan::Enterprise => ("Contact form will open for Enterprise plan.", Kind::Info),
        }
    }
}

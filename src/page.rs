// SPDX-License-Identifier: MPL-2.0
//! The landing page host.
//!
//! [`LandingPage`] owns the render surface, the timer service and every
//! widget. It builds the testimonial section at construction, routes clicks
//! and key presses to whoever owns the target, and drains due timers in
//! deadline order, handing each event back to the widget that scheduled it.

use crate::app::persisted_state::PreferenceStore;
use crate::config::{Config, CELEBRATION_MS};
use crate::surface::{ElementId, ElementSpec, Surface};
use crate::timer::{Scheduler, TimerService, TimerToken};
use crate::ui::carousel::{self, Carousel, AUTHOR_CLASS, CARD_CLASS, QUOTE_CLASS};
use crate::ui::contact_form::{ContactForm, SENT_MESSAGE};
use crate::ui::demo_modal::{self, DemoModal, ModalPhase};
use crate::ui::easter_egg::{self, Konami};
use crate::ui::notifications::{
    Kind, NotificationCenter, NotificationId, NotificationMessage, NotificationTiming,
};
use crate::ui::pricing::Plan;
use crate::ui::theming::ThemeMode;
use std::time::Duration;

/// Class of the testimonial section element.
pub const TESTIMONIALS_CLASS: &str = "testimonials";

/// Class of the element holding the testimonial panels.
pub const GRID_CLASS: &str = "testimonials-grid";

/// Timer events scheduled on behalf of the page's components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTimer {
    Notification(NotificationMessage),
    Carousel(carousel::Message),
    Demo(demo_modal::Message),
    /// The easter egg celebration is over.
    CelebrationOver,
}

impl From<NotificationMessage> for PageTimer {
    fn from(message: NotificationMessage) -> Self {
        PageTimer::Notification(message)
    }
}

impl From<carousel::Message> for PageTimer {
    fn from(message: carousel::Message) -> Self {
        PageTimer::Carousel(message)
    }
}

impl From<demo_modal::Message> for PageTimer {
    fn from(message: demo_modal::Message) -> Self {
        PageTimer::Demo(message)
    }
}

/// One customer quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

/// Quotes shown in the testimonial carousel.
pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Kutu finally tamed my hundreds of research links. Finding anything takes seconds now.",
        author: "Sarah Chen, PhD Student",
    },
    Testimonial {
        quote: "Sync between my laptop and phone just works. I stopped emailing links to myself.",
        author: "Marcus Johnson, Product Designer",
    },
    Testimonial {
        quote: "Our whole team shares collections in Kutu. Onboarding new hires got so much easier.",
        author: "Elena Rodriguez, Engineering Lead",
    },
];

/// Timings the page hands to its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    pub notifications: NotificationTiming,
    pub carousel_interval: Duration,
    pub celebration: Duration,
}

impl PageSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            notifications: NotificationTiming::from_config(config),
            carousel_interval: carousel::interval_from_config(config),
            celebration: Duration::from_millis(CELEBRATION_MS),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Host page owning the surface and every interactive component.
#[derive(Debug)]
pub struct LandingPage<S, P> {
    surface: S,
    store: P,
    timers: Scheduler<PageTimer>,
    notifications: NotificationCenter,
    carousel: Option<Carousel>,
    demo: Option<DemoModal>,
    theme: ThemeMode,
    konami: Konami,
    celebration: Option<TimerToken>,
    celebration_length: Duration,
    contact: ContactForm,
}

impl<S: Surface, P: PreferenceStore> LandingPage<S, P> {
    /// Builds the page with the default testimonials.
    pub fn new(surface: S, store: P, settings: PageSettings) -> Self {
        Self::with_testimonials(surface, store, settings, &TESTIMONIALS)
    }

    /// Builds the page around the given testimonials.
    ///
    /// The carousel only becomes active with two or more of them.
    pub fn with_testimonials(
        mut surface: S,
        store: P,
        settings: PageSettings,
        testimonials: &[Testimonial],
    ) -> Self {
        let mut timers: Scheduler<PageTimer> = Scheduler::new();
        let theme = ThemeMode::load(&store);

        let section = build_testimonials(&mut surface, testimonials);
        let panels = surface.query(CARD_CLASS);
        let carousel = Carousel::construct(
            &mut surface,
            &mut timers,
            Some(section),
            panels,
            settings.carousel_interval,
        );

        tracing::info!(
            theme = theme.as_str(),
            testimonials = testimonials.len(),
            "landing page ready"
        );

        Self {
            surface,
            store,
            timers,
            notifications: NotificationCenter::new(settings.notifications),
            carousel,
            demo: None,
            theme,
            konami: Konami::new(),
            celebration: None,
            celebration_length: settings.celebration,
            contact: ContactForm::default(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }

    #[must_use]
    pub fn timers(&self) -> &Scheduler<PageTimer> {
        &self.timers
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    #[must_use]
    pub fn demo(&self) -> Option<&DemoModal> {
        self.demo.as_ref()
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Whether the easter egg celebration is running.
    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    /// Virtual time elapsed since the page was built.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Shows a toast, replacing the current one.
    pub fn notify(&mut self, message: impl Into<String>, kind: Kind) -> NotificationId {
        self.notifications
            .show(&mut self.surface, &mut self.timers, message, kind)
    }

    /// Announces the demo and opens its modal.
    ///
    /// Returns false if a modal is already opening or shown. A modal that
    /// is still fading out is replaced.
    pub fn open_demo(&mut self) -> bool {
        if let Some(modal) = self.demo.take() {
            if modal.phase() != ModalPhase::Closing {
                self.demo = Some(modal);
                return false;
            }
            modal.teardown(&mut self.surface, &mut self.timers);
        }

        self.notify(demo_modal::ANNOUNCEMENT, Kind::Info);
        self.demo = Some(DemoModal::open(&mut self.surface, &mut self.timers));
        tracing::info!("demo requested");
        true
    }

    /// Routes a click to the component owning `element`.
    ///
    /// Returns false when nobody handles it.
    pub fn click(&mut self, element: ElementId) -> bool {
        let message = self
            .demo
            .as_ref()
            .and_then(|modal| modal.handle_click(element));
        if let Some(message) = message {
            self.dispatch(PageTimer::Demo(message));
            return true;
        }
        if let Some(message) = self.notifications.handle_click(element) {
            self.dispatch(PageTimer::Notification(message));
            return true;
        }
        let message = self
            .carousel
            .as_ref()
            .and_then(|carousel| carousel.handle_click(element));
        if let Some(message) = message {
            self.dispatch(PageTimer::Carousel(message));
            return true;
        }
        false
    }

    /// Feeds a key press to the easter egg. Escape also closes a shown demo.
    pub fn key(&mut self, key: easter_egg::Key) {
        if key == easter_egg::Key::Escape {
            let message = self.demo.as_ref().and_then(DemoModal::handle_escape);
            if let Some(message) = message {
                self.dispatch(PageTimer::Demo(message));
            }
        }
        if !self.konami.press(key) {
            return;
        }

        tracing::info!("konami code entered");
        self.notify(easter_egg::ACTIVATED_MESSAGE, Kind::Success);
        if let Some(token) = self.celebration.take() {
            self.timers.cancel(token);
        }
        self.celebration = Some(
            self.timers
                .after(self.celebration_length, PageTimer::CelebrationOver),
        );
    }

    /// Validates the contact form and reports the outcome as a toast.
    ///
    /// Returns true if the form was accepted (and cleared).
    pub fn submit_contact(&mut self) -> bool {
        match self.contact.submit() {
            Ok(()) => {
                self.notify(SENT_MESSAGE, Kind::Success);
                true
            }
            Err(err) => {
                tracing::debug!(%err, "contact form rejected");
                self.notify(err.to_string(), Kind::Error);
                false
            }
        }
    }

    pub fn choose_plan(&mut self, plan: Plan) {
        let (message, kind) = plan.acknowledgement();
        tracing::info!(plan = plan.title(), "plan chosen");
        self.notify(message, kind);
    }

    /// Flips the theme and persists the new choice.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggle();
        self.theme.persist(&mut self.store);
        tracing::debug!(theme = self.theme.as_str(), "theme toggled");
        self.theme
    }

    /// Lets `elapsed` pass, firing every timer that comes due in order.
    ///
    /// Timers scheduled while handling an event fire within the same call
    /// if their deadline also falls inside the window.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timers.now() + elapsed;
        while let Some(event) = self.timers.pop_due(until) {
            self.surface.advance_clock(self.timers.now());
            self.dispatch(event);
        }
        self.timers.settle(until);
        self.surface.advance_clock(until);
    }

    /// Removes every widget and cancels all of their timers.
    pub fn teardown(&mut self) {
        self.notifications
            .teardown(&mut self.surface, &mut self.timers);
        if let Some(carousel) = self.carousel.take() {
            carousel.teardown(&mut self.surface, &mut self.timers);
        }
        if let Some(modal) = self.demo.take() {
            modal.teardown(&mut self.surface, &mut self.timers);
        }
        if let Some(token) = self.celebration.take() {
            self.timers.cancel(token);
        }
        tracing::debug!(pending = self.timers.pending(), "landing page torn down");
    }

    fn dispatch(&mut self, event: PageTimer) {
        match event {
            PageTimer::Notification(message) => {
                self.notifications
                    .update(&mut self.surface, &mut self.timers, message);
            }
            PageTimer::Carousel(message) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.update(&mut self.surface, message);
                }
            }
            PageTimer::Demo(message) => {
                let alive = self.demo.as_mut().is_some_and(|modal| {
                    modal.update(&mut self.surface, &mut self.timers, message)
                });
                if !alive {
                    self.demo = None;
                }
            }
            PageTimer::CelebrationOver => {
                self.celebration = None;
            }
        }
    }
}

/// Appends the testimonial section and returns it.
fn build_testimonials<S: Surface + ?Sized>(
    surface: &mut S,
    testimonials: &[Testimonial],
) -> ElementId {
    let section = surface.create(None, ElementSpec::new("section").class(TESTIMONIALS_CLASS));
    let grid = surface.create(Some(section), ElementSpec::new("div").class(GRID_CLASS));
    for testimonial in testimonials {
        let card = surface.create(Some(grid), ElementSpec::new("div").class(CARD_CLASS));
        surface.create(
            Some(card),
            ElementSpec::new("p")
                .class(QUOTE_CLASS)
                .text(testimonial.quote),
        );
        surface.create(
            Some(card),
            ElementSpec::new("span")
                .class(AUTHOR_CLASS)
                .text(testimonial.author),
        );
    }
    section
}

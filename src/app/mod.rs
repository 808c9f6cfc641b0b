// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced event loop.
//!
//! The `App` struct wraps the [`LandingPage`] rendered onto an in-memory
//! [`Document`] and translates Iced messages into page operations. Wall-clock
//! ticks are converted into elapsed time and fed to the page's timers.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::Config;
use crate::page::{LandingPage, PageSettings};
use crate::surface::Document;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::FileStore;
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 960;

/// Root Iced application state.
pub struct App {
    page: LandingPage<Document, FileStore>,
    /// Instant of the previous tick while timers are running.
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.page.theme())
            .field("pending_timers", &self.page.timers().pending())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(config: Config) -> iced::Result {
    let boot = move || App::new(&config);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Opens the preference file and builds the page.
    fn new(config: &Config) -> (Self, Task<Message>) {
        let (store, warning) = FileStore::open();
        if let Some(key) = warning {
            tracing::warn!(warning = %key, "starting with default preferences");
        }
        (Self::with_store(config, store), Task::none())
    }

    fn with_store(config: &Config, store: FileStore) -> Self {
        Self::with_page(LandingPage::new(
            Document::new(),
            store,
            PageSettings::from_config(config),
        ))
    }

    fn with_page(page: LandingPage<Document, FileStore>) -> Self {
        let mut app = Self {
            page,
            last_tick: None,
        };
        app.sync_tick_clock(Instant::now());
        app
    }

    /// Starts measuring from `now` when timers become pending and stops when
    /// none are left, so the first tick after scheduling sees real elapsed
    /// time.
    fn sync_tick_clock(&mut self, now: Instant) {
        if self.page.timers().pending() == 0 {
            self.last_tick = None;
        } else if self.last_tick.is_none() {
            self.last_tick = Some(now);
        }
    }

    fn title(&self) -> String {
        "Kutu - Smart Bookmark Manager".to_string()
    }

    fn theme(&self) -> Theme {
        self.page.theme().iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.page.timers().pending() > 0);

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Clicked(element) => {
                if !self.page.click(element) {
                    tracing::debug!(element = element.raw(), "unhandled click");
                }
            }
            Message::KeyPressed(key) => self.page.key(key),
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .map(|previous| now.saturating_duration_since(previous))
                    .unwrap_or_default();
                self.last_tick = Some(now);
                self.page.advance(elapsed);
            }
            Message::ToggleTheme => {
                self.page.toggle_theme();
            }
            Message::ChoosePlan(plan) => self.page.choose_plan(plan),
            Message::OpenDemo => {
                self.page.open_demo();
            }
            Message::NameChanged(value) => self.page.contact_mut().name = value,
            Message::EmailChanged(value) => self.page.contact_mut().email = value,
            Message::SubjectSelected(subject) => {
                self.page.contact_mut().subject = Some(subject);
            }
            Message::MessageChanged(value) => self.page.contact_mut().message = value,
            Message::SubmitContact => {
                self.page.submit_contact();
            }
        }

        self.sync_tick_clock(Instant::now());

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.page)
    }
}

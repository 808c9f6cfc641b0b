// SPDX-License-Identifier: MPL-2.0
//! Demo modal state and its fade choreography on the surface.

use crate::config::{DEMO_FADE_IN_DELAY_MS, DEMO_FADE_MS};
use crate::surface::{ElementId, ElementSpec, Style, Surface};
use crate::timer::{TimerService, TimerToken};
use std::time::Duration;

/// Info toast shown when the demo is requested.
pub const ANNOUNCEMENT: &str = "Demo video will play shortly!";

pub const TITLE: &str = "Kutu Demo Video";
pub const BODY: &str = "Demo video would play here showing all the amazing features of Kutu!";

/// Class of the full-window backdrop.
pub const MODAL_CLASS: &str = "demo-modal";
pub const CONTENT_CLASS: &str = "demo-modal-content";
pub const TITLE_CLASS: &str = "demo-modal-title";
pub const PLACEHOLDER_CLASS: &str = "demo-modal-placeholder";
pub const BODY_CLASS: &str = "demo-modal-body";
pub const CLOSE_CLASS: &str = "close-modal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Entrance delay elapsed: fade in.
    FadeIn,
    /// Close button, backdrop or Escape.
    Close,
    /// Fade-out finished: remove from the surface.
    Remove,
}

/// Where the modal is in its fade choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Transparent, waiting for the entrance delay.
    Opening,
    /// Fully shown.
    Open,
    /// Fading out; removed once the fade completes.
    Closing,
}

/// An open demo modal.
#[derive(Debug)]
pub struct DemoModal {
    backdrop: ElementId,
    close_button: ElementId,
    phase: ModalPhase,
    fade_timer: Option<TimerToken>,
    remove_timer: Option<TimerToken>,
}

impl DemoModal {
    /// Appends the modal, fully transparent, and schedules its fade-in.
    pub fn open<E, S, T>(surface: &mut S, timers: &mut T) -> Self
    where
        E: From<Message>,
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        let backdrop = surface.create(None, ElementSpec::new("div").class(MODAL_CLASS));
        surface.set_style(backdrop, Style::Opacity(0.0));
        surface.set_style(
            backdrop,
            Style::Transition(Duration::from_millis(DEMO_FADE_MS)),
        );

        let content = surface.create(
            Some(backdrop),
            ElementSpec::new("div").class(CONTENT_CLASS),
        );
        surface.create(
            Some(content),
            ElementSpec::new("h3").class(TITLE_CLASS).text(TITLE),
        );
        surface.create(
            Some(content),
            ElementSpec::new("div")
                .class(PLACEHOLDER_CLASS)
                .label("Play demo"),
        );
        surface.create(
            Some(content),
            ElementSpec::new("p").class(BODY_CLASS).text(BODY),
        );
        let close_button = surface.create(
            Some(content),
            ElementSpec::new("button").class(CLOSE_CLASS).text("Close"),
        );

        let fade_timer = timers.after(
            Duration::from_millis(DEMO_FADE_IN_DELAY_MS),
            Message::FadeIn.into(),
        );
        tracing::debug!("demo modal opened");

        Self {
            backdrop,
            close_button,
            phase: ModalPhase::Opening,
            fade_timer: Some(fade_timer),
            remove_timer: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    #[must_use]
    pub fn backdrop(&self) -> ElementId {
        self.backdrop
    }

    #[must_use]
    pub fn close_button(&self) -> ElementId {
        self.close_button
    }

    /// Starts the fade-out. Returns `false` if it is already closing.
    pub fn close<E, S, T>(&mut self, surface: &mut S, timers: &mut T) -> bool
    where
        E: From<Message>,
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        if self.phase == ModalPhase::Closing {
            return false;
        }
        if let Some(token) = self.fade_timer.take() {
            timers.cancel(token);
        }

        surface.set_style(self.backdrop, Style::Opacity(0.0));
        self.phase = ModalPhase::Closing;
        self.remove_timer = Some(timers.after(
            Duration::from_millis(DEMO_FADE_MS),
            Message::Remove.into(),
        ));
        tracing::debug!("demo modal closing");
        true
    }

    /// Handles a modal message. Returns `false` once the modal is gone.
    pub fn update<E, S, T>(&mut self, surface: &mut S, timers: &mut T, message: Message) -> bool
    where
        E: From<Message>,
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        match message {
            Message::FadeIn => {
                if self.phase == ModalPhase::Opening {
                    surface.set_style(self.backdrop, Style::Opacity(1.0));
                    self.fade_timer = None;
                    self.phase = ModalPhase::Open;
                }
                true
            }
            Message::Close => {
                self.close::<E, S, T>(surface, timers);
                true
            }
            Message::Remove => {
                if self.phase != ModalPhase::Closing {
                    return true;
                }
                self.remove_timer = None;
                surface.remove(self.backdrop);
                tracing::debug!("demo modal removed");
                false
            }
        }
    }

    /// Escape only closes a fully shown modal.
    #[must_use]
    pub fn handle_escape(&self) -> Option<Message> {
        (self.phase == ModalPhase::Open).then_some(Message::Close)
    }

    /// Maps a press on the close button or on the backdrop to `Close`.
    #[must_use]
    pub fn handle_click(&self, element: ElementId) -> Option<Message> {
        (element == self.close_button || element == self.backdrop).then_some(Message::Close)
    }

    /// Removes the modal at once and cancels its timers.
    pub fn teardown<E, S, T>(mut self, surface: &mut S, timers: &mut T)
    where
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        for token in [self.fade_timer.take(), self.remove_timer.take()]
            .into_iter()
            .flatten()
        {
            timers.cancel(token);
        }
        surface.remove(self.backdrop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Document, StyleProperty};
    use crate::timer::Scheduler;

    struct Harness {
        doc: Document,
        timers: Scheduler<Message>,
        modal: Option<DemoModal>,
    }

    impl Harness {
        fn open() -> Self {
            let mut doc = Document::new();
            let mut timers = Scheduler::new();
            let modal = DemoModal::open(&mut doc, &mut timers);
            Self {
                doc,
                timers,
                modal: Some(modal),
            }
        }

        fn send(&mut self, message: Message) {
            if let Some(modal) = self.modal.as_mut() {
                if !modal.update(&mut self.doc, &mut self.timers, message) {
                    self.modal = None;
                }
            }
        }

        fn advance_ms(&mut self, ms: u64) {
            let until = self.timers.now() + Duration::from_millis(ms);
            while let Some(message) = self.timers.pop_due(until) {
                self.doc.advance_clock(self.timers.now());
                self.send(message);
            }
            self.timers.settle(until);
            self.doc.advance_clock(until);
        }

        fn opacity(&self) -> Option<Style> {
            let backdrop = self.doc.first(MODAL_CLASS)?;
            self.doc.style(backdrop, StyleProperty::Opacity)
        }

        fn phase(&self) -> Option<ModalPhase> {
            self.modal.as_ref().map(DemoModal::phase)
        }
    }

    #[test]
    fn opens_transparent_with_placeholder_content() {
        let h = Harness::open();
        assert_eq!(h.opacity(), Some(Style::Opacity(0.0)));
        assert_eq!(h.phase(), Some(ModalPhase::Opening));

        let title = h.doc.first(TITLE_CLASS).expect("title");
        assert_eq!(h.doc.text(title), Some(TITLE));
        assert!(h.doc.first(PLACEHOLDER_CLASS).is_some());
        assert_eq!(h.doc.query(CLOSE_CLASS).len(), 1);
    }

    #[test]
    fn fades_in_after_entrance_delay() {
        let mut h = Harness::open();
        h.advance_ms(99);
        assert_eq!(h.opacity(), Some(Style::Opacity(0.0)));

        h.advance_ms(1);
        assert_eq!(h.opacity(), Some(Style::Opacity(1.0)));
        assert_eq!(h.phase(), Some(ModalPhase::Open));
    }

    #[test]
    fn close_fades_out_then_removes() {
        let mut h = Harness::open();
        h.advance_ms(500);
        let close = h.modal.as_ref().map(DemoModal::close_button).expect("open");

        let message = h.modal.as_ref().and_then(|m| m.handle_click(close));
        assert_eq!(message, Some(Message::Close));
        h.send(Message::Close);
        assert_eq!(h.opacity(), Some(Style::Opacity(0.0)));
        assert_eq!(h.phase(), Some(ModalPhase::Closing));

        h.advance_ms(299);
        assert!(h.doc.first(MODAL_CLASS).is_some());
        h.advance_ms(1);
        assert!(h.doc.first(MODAL_CLASS).is_none());
        assert!(h.modal.is_none());
        assert_eq!(h.timers.pending(), 0);
    }

    #[test]
    fn backdrop_closes_but_content_does_not() {
        let h = Harness::open();
        let modal = h.modal.as_ref().expect("open");
        let content = h.doc.first(CONTENT_CLASS).expect("content");

        assert_eq!(modal.handle_click(modal.backdrop()), Some(Message::Close));
        assert_eq!(modal.handle_click(content), None);
    }

    #[test]
    fn escape_only_closes_fully_shown_modal() {
        let mut h = Harness::open();
        assert_eq!(h.modal.as_ref().and_then(DemoModal::handle_escape), None);

        h.advance_ms(100);
        assert_eq!(
            h.modal.as_ref().and_then(DemoModal::handle_escape),
            Some(Message::Close)
        );

        h.send(Message::Close);
        assert_eq!(h.modal.as_ref().and_then(DemoModal::handle_escape), None);
    }

    #[test]
    fn close_before_fade_in_cancels_it() {
        let mut h = Harness::open();
        h.send(Message::Close);
        h.advance_ms(100);
        assert_eq!(h.opacity(), Some(Style::Opacity(0.0)));
        assert_eq!(h.phase(), Some(ModalPhase::Closing));
    }

    #[test]
    fn second_close_is_ignored() {
        let mut h = Harness::open();
        h.send(Message::Close);
        h.advance_ms(200);
        h.send(Message::Close);

        h.advance_ms(100);
        assert!(h.modal.is_none());
    }

    #[test]
    fn fade_is_rendered_over_transition() {
        let mut h = Harness::open();
        h.advance_ms(250);
        let backdrop = h.doc.first(MODAL_CLASS).expect("backdrop");
        assert_eq!(
            h.doc
                .rendered(backdrop, StyleProperty::Opacity, Duration::from_millis(250)),
            Some(Style::Opacity(0.5))
        );
    }

    #[test]
    fn teardown_removes_everything() {
        let mut h = Harness::open();
        let modal = h.modal.take().expect("open");
        modal.teardown(&mut h.doc, &mut h.timers);
        assert!(h.doc.is_empty());
        assert_eq!(h.timers.pending(), 0);
    }
}

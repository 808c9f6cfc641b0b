// SPDX-License-Identifier: MPL-2.0
//! Rotating testimonial panels with dot indicators.

use crate::config::{
    Config, DEFAULT_CAROUSEL_INTERVAL_MS, MAX_CAROUSEL_INTERVAL_MS, MIN_CAROUSEL_INTERVAL_MS,
};
use crate::surface::{ElementId, ElementSpec, Fill, Offset, Style, StyleProperty, Surface};
use crate::timer::{TimerService, TimerToken};
use std::time::Duration;

/// Class of the row holding the dot indicators.
pub const DOTS_CLASS: &str = "testimonial-dots";

/// Class of a single dot indicator.
pub const DOT_CLASS: &str = "testimonial-dot";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The automatic advance timer fired.
    Advance,
    /// A dot was pressed.
    Select(usize),
}

/// Reads `[carousel] interval_ms`, clamped to its valid range.
#[must_use]
pub fn interval_from_config(config: &Config) -> Duration {
    let ms = config
        .carousel
        .interval_ms
        .unwrap_or(DEFAULT_CAROUSEL_INTERVAL_MS)
        .clamp(MIN_CAROUSEL_INTERVAL_MS, MAX_CAROUSEL_INTERVAL_MS);
    Duration::from_millis(ms)
}

/// An active carousel. Only exists for two or more panels.
#[derive(Debug)]
pub struct Carousel {
    panels: Vec<ElementId>,
    dots_row: ElementId,
    dots: Vec<ElementId>,
    active: usize,
    timer: Option<TimerToken>,
}

impl Carousel {
    /// Builds the carousel over existing panels.
    ///
    /// With zero or one panel nothing is created, no timer starts and `None`
    /// is returned. Otherwise one dot per panel is appended under
    /// `dots_parent`, the first panel is shown and the advance timer starts.
    pub fn construct<E, S, T>(
        surface: &mut S,
        timers: &mut T,
        dots_parent: Option<ElementId>,
        panels: Vec<ElementId>,
        interval: Duration,
    ) -> Option<Self>
    where
        E: From<Message>,
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        if panels.len() <= 1 {
            tracing::debug!(panels = panels.len(), "carousel inactive");
            return None;
        }

        let dots_row = surface.create(dots_parent, ElementSpec::new("div").class(DOTS_CLASS));
        let dots = (0..panels.len())
            .map(|index| {
                surface.create(
                    Some(dots_row),
                    ElementSpec::new("button")
                        .class(DOT_CLASS)
                        .label(format!("Show testimonial {}", index + 1)),
                )
            })
            .collect();

        let mut carousel = Self {
            panels,
            dots_row,
            dots,
            active: 0,
            timer: None,
        };
        carousel.go_to(surface, 0);
        carousel.timer = Some(timers.every(interval, Message::Advance.into()));

        tracing::debug!(panels = carousel.len(), ?interval, "carousel started");
        Some(carousel)
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always false: an empty carousel is never constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn panels(&self) -> &[ElementId] {
        &self.panels
    }

    #[must_use]
    pub fn dots(&self) -> &[ElementId] {
        &self.dots
    }

    /// Horizontal offset of each panel, in percent of the panel width.
    #[must_use]
    pub fn offsets(&self) -> Vec<f32> {
        (0..self.panels.len())
            .map(|index| self.offset_of(index))
            .collect()
    }

    /// Whether each dot is highlighted.
    #[must_use]
    pub fn dot_highlights(&self) -> Vec<bool> {
        (0..self.dots.len()).map(|index| index == self.active).collect()
    }

    /// Makes panel `index` the visible one.
    ///
    /// Every panel is moved by its distance from `index` and every dot is
    /// re-highlighted. An out-of-range index is rejected: nothing changes
    /// and `false` is returned.
    pub fn go_to<S: Surface + ?Sized>(&mut self, surface: &mut S, index: usize) -> bool {
        if index >= self.panels.len() {
            tracing::debug!(index, panels = self.panels.len(), "carousel index out of range");
            return false;
        }

        self.active = index;
        for (i, panel) in self.panels.iter().enumerate() {
            surface.set_style(
                *panel,
                Style::TranslateX(Offset::Percent(self.offset_of(i))),
            );
        }
        for (i, dot) in self.dots.iter().enumerate() {
            let fill = if i == index { Fill::Primary } else { Fill::Border };
            surface.set_style(*dot, Style::Background(fill));
        }
        true
    }

    /// Moves to the next panel, wrapping after the last one.
    pub fn next<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let next = (self.active + 1) % self.panels.len();
        self.go_to(surface, next);
    }

    pub fn update<S: Surface + ?Sized>(&mut self, surface: &mut S, message: Message) {
        match message {
            Message::Advance => self.next(surface),
            Message::Select(index) => {
                self.go_to(surface, index);
            }
        }
    }

    /// Single delegated click handler: maps a pressed dot to its index.
    #[must_use]
    pub fn handle_click(&self, element: ElementId) -> Option<Message> {
        self.dots
            .iter()
            .position(|dot| *dot == element)
            .map(Message::Select)
    }

    /// Stops the advance timer and removes everything the carousel added.
    ///
    /// Panels stay on the surface with their transforms cleared.
    pub fn teardown<E, S, T>(mut self, surface: &mut S, timers: &mut T)
    where
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        if let Some(token) = self.timer.take() {
            timers.cancel(token);
        }
        surface.remove(self.dots_row);
        for panel in &self.panels {
            surface.clear_style(*panel, StyleProperty::Transform);
        }
        tracing::debug!("carousel torn down");
    }

    fn offset_of(&self, index: usize) -> f32 {
        (index as f32 - self.active as f32) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Document;
    use crate::timer::Scheduler;

    const INTERVAL: Duration = Duration::from_millis(5_000);

    struct Harness {
        doc: Document,
        timers: Scheduler<Message>,
        panels: Vec<ElementId>,
        section: ElementId,
    }

    impl Harness {
        fn new(count: usize) -> Self {
            let mut doc = Document::new();
            let section = doc.create(None, ElementSpec::new("section"));
            let panels = (0..count)
                .map(|i| {
                    doc.create(
                        Some(section),
                        ElementSpec::new("div")
                            .class("testimonial-card")
                            .text(format!("panel {i}")),
                    )
                })
                .collect();
            Self {
                doc,
                timers: Scheduler::new(),
                panels,
                section,
            }
        }

        fn construct(&mut self) -> Option<Carousel> {
            Carousel::construct(
                &mut self.doc,
                &mut self.timers,
                Some(self.section),
                self.panels.clone(),
                INTERVAL,
            )
        }

        fn advance_ms(&mut self, carousel: &mut Carousel, ms: u64) {
            let until = self.timers.now() + Duration::from_millis(ms);
            while let Some(message) = self.timers.pop_due(until) {
                carousel.update(&mut self.doc, message);
            }
            self.timers.settle(until);
        }

        fn panel_offset(&self, index: usize) -> Option<Style> {
            self.doc
                .style(self.panels[index], StyleProperty::Transform)
        }
    }

    #[test]
    fn zero_or_one_panel_is_inert() {
        for count in [0, 1] {
            let mut h = Harness::new(count);
            assert!(h.construct().is_none());
            assert!(h.doc.query(DOT_CLASS).is_empty());
            assert!(h.doc.query(DOTS_CLASS).is_empty());
            assert_eq!(h.timers.pending(), 0);
            if count == 1 {
                assert_eq!(h.panel_offset(0), None);
            }
        }
    }

    #[test]
    fn construct_creates_one_dot_per_panel_in_order() {
        let mut h = Harness::new(3);
        let carousel = h.construct().expect("three panels");

        let row = h.doc.first(DOTS_CLASS).expect("dot row");
        assert_eq!(h.doc.parent(row), Some(h.section));
        assert_eq!(h.doc.children(row), carousel.dots());
        assert_eq!(h.doc.query(DOT_CLASS).len(), 3);
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.dot_highlights(), vec![true, false, false]);
        assert_eq!(h.timers.pending(), 1);
    }

    #[test]
    fn construct_positions_panels_at_first() {
        let mut h = Harness::new(3);
        let carousel = h.construct().expect("three panels");

        assert_eq!(carousel.offsets(), vec![0.0, 100.0, 200.0]);
        assert_eq!(
            h.panel_offset(2),
            Some(Style::TranslateX(Offset::Percent(200.0)))
        );
    }

    #[test]
    fn one_tick_moves_to_second_panel() {
        let mut h = Harness::new(3);
        let mut carousel = h.construct().expect("three panels");

        h.advance_ms(&mut carousel, 5_000);

        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.offsets(), vec![-100.0, 0.0, 100.0]);
        assert_eq!(
            h.panel_offset(0),
            Some(Style::TranslateX(Offset::Percent(-100.0)))
        );
        assert_eq!(
            h.panel_offset(1),
            Some(Style::TranslateX(Offset::Percent(0.0)))
        );
        assert_eq!(
            h.panel_offset(2),
            Some(Style::TranslateX(Offset::Percent(100.0)))
        );
    }

    #[test]
    fn no_advance_before_interval() {
        let mut h = Harness::new(2);
        let mut carousel = h.construct().expect("two panels");

        h.advance_ms(&mut carousel, 4_999);
        assert_eq!(carousel.active_index(), 0);

        h.advance_ms(&mut carousel, 1);
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn advance_wraps_from_last_to_first() {
        let mut h = Harness::new(4);
        let mut carousel = h.construct().expect("four panels");

        assert!(carousel.go_to(&mut h.doc, 3));
        h.advance_ms(&mut carousel, 5_000);
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.dot_highlights(), vec![true, false, false, false]);
    }

    #[test]
    fn advance_keeps_cycling() {
        let mut h = Harness::new(3);
        let mut carousel = h.construct().expect("three panels");

        let mut seen = Vec::new();
        for _ in 0..7 {
            h.advance_ms(&mut carousel, 5_000);
            seen.push(carousel.active_index());
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn go_to_updates_every_dot() {
        let mut h = Harness::new(5);
        let mut carousel = h.construct().expect("five panels");

        for target in 0..5 {
            assert!(carousel.go_to(&mut h.doc, target));
            assert_eq!(carousel.active_index(), target);
            for (j, dot) in carousel.dots().iter().enumerate() {
                let expected = if j == target { Fill::Primary } else { Fill::Border };
                assert_eq!(
                    h.doc.style(*dot, StyleProperty::Background),
                    Some(Style::Background(expected))
                );
                assert_eq!(carousel.dot_highlights()[j], j == target);
            }
        }
    }

    #[test]
    fn out_of_range_go_to_is_rejected() {
        let mut h = Harness::new(3);
        let mut carousel = h.construct().expect("three panels");
        carousel.go_to(&mut h.doc, 1);

        assert!(!carousel.go_to(&mut h.doc, 3));
        assert!(!carousel.go_to(&mut h.doc, usize::MAX));
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.offsets(), vec![-100.0, 0.0, 100.0]);
    }

    #[test]
    fn dot_click_selects_its_panel() {
        let mut h = Harness::new(3);
        let mut carousel = h.construct().expect("three panels");

        let dot = carousel.dots()[2];
        let message = carousel.handle_click(dot).expect("dot is handled");
        assert_eq!(message, Message::Select(2));
        carousel.update(&mut h.doc, message);
        assert_eq!(carousel.active_index(), 2);

        assert_eq!(carousel.handle_click(h.panels[0]), None);
    }

    #[test]
    fn manual_selection_does_not_pause_timer() {
        let mut h = Harness::new(3);
        let mut carousel = h.construct().expect("three panels");

        h.advance_ms(&mut carousel, 4_000);
        carousel.update(&mut h.doc, Message::Select(2));
        h.advance_ms(&mut carousel, 1_000);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn teardown_stops_timer_and_removes_dots() {
        let mut h = Harness::new(3);
        let carousel = h.construct().expect("three panels");

        carousel.teardown(&mut h.doc, &mut h.timers);

        assert_eq!(h.timers.pending(), 0);
        assert!(h.doc.query(DOT_CLASS).is_empty());
        assert!(h.doc.query(DOTS_CLASS).is_empty());
        assert_eq!(h.doc.query("testimonial-card").len(), 3);
        assert_eq!(h.panel_offset(1), None);
        assert!(h.timers.advance(Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn interval_is_read_from_config_and_clamped() {
        let mut config = Config::default();
        assert_eq!(interval_from_config(&config), INTERVAL);

        config.carousel.interval_ms = Some(10);
        assert_eq!(
            interval_from_config(&config),
            Duration::from_millis(MIN_CAROUSEL_INTERVAL_MS)
        );

        config.carousel.interval_ms = None;
        assert_eq!(interval_from_config(&config), INTERVAL);
    }
}

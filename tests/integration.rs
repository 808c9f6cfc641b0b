// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the landing page driven through virtual time.

use kutu_landing::app::persisted_state::{FileStore, MemoryStore, PreferenceStore};
use kutu_landing::config::{self, Config};
use kutu_landing::page::{LandingPage, PageSettings, TESTIMONIALS};
use kutu_landing::surface::{Document, Offset, Style, StyleProperty, Surface};
use kutu_landing::ui::carousel::{Carousel, CARD_CLASS, DOT_CLASS};
use kutu_landing::ui::demo_modal::{self, DemoModal, ModalPhase, MODAL_CLASS};
use kutu_landing::ui::easter_egg::Key;
use kutu_landing::ui::notifications::{Kind, NOTIFICATION_CLASS};
use kutu_landing::ui::theming::ThemeMode;
use std::time::Duration;
use tempfile::tempdir;

fn page() -> LandingPage<Document, MemoryStore> {
    LandingPage::new(Document::new(), MemoryStore::new(), PageSettings::default())
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn toast_count(page: &LandingPage<Document, MemoryStore>) -> usize {
    page.surface().query(NOTIFICATION_CLASS).len()
}

#[test]
fn show_success_renders_one_styled_toast_until_it_expires() {
    let mut page = page();
    page.notify("Message sent successfully!", Kind::Success);

    let toasts = page.surface().query(NOTIFICATION_CLASS);
    assert_eq!(toasts.len(), 1);
    let doc = page.surface();
    assert_eq!(doc.text(toasts[0]), Some("Message sent successfully!"));
    assert!(doc.has_class(toasts[0], "notification-success"));

    page.advance(ms(5_000));
    assert_eq!(toast_count(&page), 1, "exit transition still running");

    page.advance(ms(300));
    assert_eq!(toast_count(&page), 0);
}

#[test]
fn toast_slides_in_and_out_over_its_transition() {
    let mut page = page();
    page.notify("hello", Kind::Info);
    let toast = page.surface().first(NOTIFICATION_CLASS).expect("toast");
    let shown_at = |page: &LandingPage<Document, MemoryStore>| {
        page.surface()
            .rendered(toast, StyleProperty::Transform, page.now())
    };

    page.advance(ms(100));
    assert_eq!(shown_at(&page), Some(Style::TranslateX(Offset::Px(400.0))));

    page.advance(ms(150));
    assert_eq!(shown_at(&page), Some(Style::TranslateX(Offset::Px(200.0))));

    page.advance(ms(4_900));
    assert_eq!(toast_count(&page), 1);
    assert_eq!(shown_at(&page), Some(Style::TranslateX(Offset::Px(200.0))));

    page.advance(ms(150));
    assert_eq!(toast_count(&page), 0);
}

#[test]
fn at_most_one_toast_across_many_shows() {
    let mut page = page();
    let steps = [0, 50, 120, 400, 4_900, 5_100, 30, 310, 7_000];

    for (i, step) in steps.into_iter().enumerate() {
        let kind = Kind::from_name(["info", "success", "error", "bogus"][i % 4]);
        page.notify(format!("message {i}"), kind);
        assert_eq!(toast_count(&page), 1);

        page.advance(ms(step));
        assert!(toast_count(&page) <= 1);
    }
}

#[test]
fn stale_timer_never_dismisses_newer_toast() {
    let mut page = page();
    page.notify("first", Kind::Info);
    page.advance(ms(4_000));
    page.notify("second", Kind::Info);

    page.advance(ms(1_500));
    let active = page.notifications().active().expect("second still shown");
    assert_eq!(active.message(), "second");
    assert!(active.is_visible());
}

#[test]
fn close_button_twice_is_harmless() {
    let mut page = page();
    page.notify("bye", Kind::Error);
    let close = page
        .notifications()
        .active()
        .map(|n| n.close_button())
        .expect("toast shown");

    assert!(page.click(close));
    page.click(close);
    page.advance(ms(300));
    assert_eq!(toast_count(&page), 0);
    assert!(!page.click(close));
}

#[test]
fn carousel_tick_matches_documented_example() {
    let mut page = page();
    page.advance(ms(5_000));

    let carousel = page.carousel().expect("three testimonials");
    assert_eq!(carousel.active_index(), 1);

    let panels = page.surface().query(CARD_CLASS);
    let offsets: Vec<_> = panels
        .iter()
        .map(|panel| page.surface().style(*panel, StyleProperty::Transform))
        .collect();
    assert_eq!(
        offsets,
        vec![
            Some(Style::TranslateX(Offset::Percent(-100.0))),
            Some(Style::TranslateX(Offset::Percent(0.0))),
            Some(Style::TranslateX(Offset::Percent(100.0))),
        ]
    );
}

#[test]
fn carousel_wraps_from_last_panel() {
    let mut page = page();
    let last_dot = page
        .carousel()
        .map(|c| c.dots()[TESTIMONIALS.len() - 1])
        .expect("active carousel");
    page.click(last_dot);

    page.advance(ms(5_000));
    assert_eq!(page.carousel().map(Carousel::active_index), Some(0));
}

#[test]
fn dot_highlights_follow_active_index() {
    let mut page = page();
    for _ in 0..5 {
        page.advance(ms(5_000));
        let carousel = page.carousel().expect("active carousel");
        let active = carousel.active_index();
        for (j, highlighted) in carousel.dot_highlights().into_iter().enumerate() {
            assert_eq!(highlighted, j == active);
        }
    }
}

#[test]
fn inert_carousel_never_advances() {
    for count in [0, 1] {
        let mut page = LandingPage::with_testimonials(
            Document::new(),
            MemoryStore::new(),
            PageSettings::default(),
            &TESTIMONIALS[..count],
        );
        page.advance(ms(60_000));
        assert!(page.carousel().is_none());
        assert!(page.surface().query(DOT_CLASS).is_empty());
        assert_eq!(page.timers().pending(), 0);
    }
}

#[test]
fn configured_timings_drive_both_widgets() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[notifications]\ndisplay_ms = 2000\ntransition_ms = 100\n\n[carousel]\ninterval_ms = 1500\n",
    )
    .expect("write settings");
    let config: Config = config::load_from_path(&path).expect("load settings");

    let mut page = LandingPage::new(
        Document::new(),
        MemoryStore::new(),
        PageSettings::from_config(&config),
    );
    page.notify("short", Kind::Info);

    page.advance(ms(1_500));
    assert_eq!(page.carousel().map(Carousel::active_index), Some(1));

    page.advance(ms(600));
    assert!(page.surface().query(NOTIFICATION_CLASS).is_empty());
}

#[test]
fn theme_preference_persists_through_file_store() {
    let dir = tempdir().expect("create temp dir");
    let base = dir.path().to_path_buf();

    let (store, warning) = FileStore::open_in(Some(base.clone()));
    assert!(warning.is_none());
    let mut page = LandingPage::new(Document::new(), store, PageSettings::default());
    page.toggle_theme();

    let (store, _) = FileStore::open_in(Some(base));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    let page = LandingPage::new(Document::new(), store, PageSettings::default());
    assert_eq!(page.theme(), ThemeMode::Dark);
}

#[test]
fn teardown_releases_everything() {
    let mut page = page();
    page.notify("bye", Kind::Info);
    page.advance(ms(2_500));
    page.teardown();

    assert_eq!(page.timers().pending(), 0);
    assert_eq!(toast_count(&page), 0);
    assert!(page.surface().query(DOT_CLASS).is_empty());
    page.advance(ms(60_000));
    assert_eq!(page.surface().query(CARD_CLASS).len(), TESTIMONIALS.len());
}

#[test]
fn demo_modal_fades_in_and_closes_from_its_button() {
    let mut page = page();
    assert!(page.open_demo());
    assert_eq!(
        page.notifications().active().map(|n| n.message()),
        Some(demo_modal::ANNOUNCEMENT)
    );

    let backdrop = page.demo().map(DemoModal::backdrop).expect("modal");
    assert_eq!(
        page.surface().style(backdrop, StyleProperty::Opacity),
        Some(Style::Opacity(0.0))
    );

    page.advance(ms(250));
    assert_eq!(
        page.surface()
            .rendered(backdrop, StyleProperty::Opacity, page.now()),
        Some(Style::Opacity(0.5))
    );

    let close = page.demo().map(DemoModal::close_button).expect("modal");
    assert!(page.click(close));
    assert_eq!(page.demo().map(DemoModal::phase), Some(ModalPhase::Closing));

    page.advance(ms(300));
    assert!(page.demo().is_none());
    assert!(page.surface().query(MODAL_CLASS).is_empty());
}

#[test]
fn escape_before_fade_in_keeps_demo_open() {
    let mut page = page();
    page.open_demo();
    page.key(Key::Escape);
    page.advance(ms(100));
    assert_eq!(page.demo().map(DemoModal::phase), Some(ModalPhase::Open));

    page.key(Key::Escape);
    page.advance(ms(300));
    assert!(page.demo().is_none());
}

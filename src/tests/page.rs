use std::cell::{ Cell, RefCell };
use std::time::{ Duration, Instant };
use dioxus::prelude::*;
use crate::components::{ next_open, toggle_affordance, use_theme, IconKind, ThemeHandle, ThemeProvider };
use crate::utils::{ sleep, CopyFeedback, Theme };
use super::common;

thread_local! {
    static RENDERED: RefCell<Vec<Theme>> = const { RefCell::new(Vec::new()) };
    static HANDLE: Cell<Option<ThemeHandle>> = const { Cell::new(None) };
}

#[component]
fn ThemeReader() -> Element {
    let handle = use_theme();
    HANDLE.with(|h| h.set(Some(handle)));
    let theme = handle.theme();
    RENDERED.with(|r| r.borrow_mut().push(theme));

    rsx! {
        span { "{theme}" }
    }
}

#[component]
fn ProvidedReader() -> Element {
    rsx! {
        ThemeProvider { storage_key: "theme".to_string(), ThemeReader {} }
    }
}

#[test]
fn test_light_theme_offers_dark_mode() {
    let affordance = toggle_affordance(Theme::Light);
    assert_eq!(affordance.icon, IconKind::Moon);
    assert_eq!(affordance.test_id, "icon-moon");
}

#[test]
fn test_dark_theme_offers_light_mode() {
    let affordance = toggle_affordance(Theme::Dark);
    assert_eq!(affordance.icon, IconKind::Sun);
    assert_eq!(affordance.test_id, "icon-sun");
    assert_eq!(affordance.label, "Switch to light mode");
}

#[test]
fn test_affordance_follows_toggle() {
    let theme = Theme::Light;
    assert_eq!(toggle_affordance(theme.toggled()).icon, IconKind::Sun);
}

#[test]
fn test_provider_rerenders_readers_on_toggle() {
    common::setup();
    let mut dom = VirtualDom::new(ProvidedReader);
    dom.rebuild_in_place();
    let handle = HANDLE.with(|h| h.get()).expect("reader mounted");

    dom.in_runtime(|| handle.toggle());
    dom.render_immediate_to_vec();
    dom.in_runtime(|| handle.toggle());
    dom.render_immediate_to_vec();

    let rendered = RENDERED.with(|r| r.borrow().clone());
    assert_eq!(rendered, vec![Theme::Light, Theme::Dark, Theme::Light]);
}

#[test]
fn test_accordion_single_collapsible() {
    assert_eq!(next_open(None, "dataset-pipeline"), Some("dataset-pipeline".to_string()));
    assert_eq!(next_open(Some("dataset-pipeline"), "dataset-pipeline"), None);
    assert_eq!(
        next_open(Some("dataset-pipeline"), "hierarchical-orchestration"),
        Some("hierarchical-orchestration".to_string())
    );
}

#[test]
fn test_copy_feedback_resets_after_its_own_timer() {
    let mut feedback = CopyFeedback::default();
    assert!(!feedback.is_copied());

    let ticket = feedback.mark_copied();
    assert!(feedback.is_copied());
    assert!(feedback.expire(ticket));
    assert!(!feedback.is_copied());
    assert!(!feedback.expire(ticket));
}

#[test]
fn test_copy_feedback_ignores_stale_timer() {
    let mut feedback = CopyFeedback::default();
    let first = feedback.mark_copied();
    let second = feedback.mark_copied();

    assert!(!feedback.expire(first));
    assert!(feedback.is_copied());
    assert!(feedback.expire(second));
    assert!(!feedback.is_copied());
}

#[test]
fn test_sleep_waits() {
    let started = Instant::now();
    futures::executor::block_on(sleep(30));
    assert!(started.elapsed() >= Duration::from_millis(30));
}

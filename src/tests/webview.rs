use dioxus::prelude::*;
use crate::error::ThemeError;
use crate::utils::{ copy_text, MemoryStorage, PreferenceStorage, Theme, ThemeRoot, ThemeStore, WebviewRoot };
use super::common;

#[component]
fn Blank() -> Element {
    rsx! {}
}

/// Runs `f` inside a mounted app that has no webview document behind it.
fn without_document<T>(f: impl FnOnce() -> T) -> T {
    let mut dom = VirtualDom::new(Blank);
    dom.rebuild_in_place();
    dom.in_runtime(|| ScopeId::ROOT.in_runtime(f))
}

#[test]
fn test_copy_without_clipboard_reports_failure() {
    common::setup();
    let result = without_document(|| futures::executor::block_on(copy_text("@article{agentflux2024}")));
    assert!(result.is_err(), "copy reported success: {:?}", result);
}

#[test]
fn test_webview_root_reports_failed_script() {
    common::setup();
    let result = without_document(|| WebviewRoot.apply(Theme::Dark));
    assert!(matches!(result, Err(ThemeError::Document(_))), "unexpected {:?}", result);
}

#[test]
fn test_store_toggles_when_webview_root_fails() {
    common::setup();
    let storage = MemoryStorage::new();
    let theme = without_document(|| {
        let mut store = ThemeStore::load("theme", Box::new(storage.clone()), Box::new(WebviewRoot));
        store.toggle()
    });

    assert_eq!(theme, Theme::Dark);
    assert_eq!(storage.read("theme"), Ok(Some("dark".to_string())));
}

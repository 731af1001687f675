use crate::error::ThemeError;
use super::theme_state::Theme;

const DARK_CLASS: &str = "dark";

/// The presentation root that dependent styles key off.
pub trait ThemeRoot {
    fn apply(&self, theme: Theme) -> Result<(), ThemeError>;
}

/// `<html>` of the current browser document.
#[cfg(target_arch = "wasm32")]
pub struct DocumentRoot;

#[cfg(target_arch = "wasm32")]
impl ThemeRoot for DocumentRoot {
    fn apply(&self, theme: Theme) -> Result<(), ThemeError> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| ThemeError::Document("no document element".to_string()))?;

        root.class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark())
            .map_err(|e| ThemeError::Document(format!("{:?}", e)))?;
        root.set_attribute("data-theme", theme.as_str()).map_err(|e| ThemeError::Document(format!("{:?}", e)))
    }
}

/// `<html>` of a desktop/mobile webview, reached through `document::eval`.
#[cfg(not(target_arch = "wasm32"))]
pub struct WebviewRoot;

#[cfg(not(target_arch = "wasm32"))]
impl ThemeRoot for WebviewRoot {
    fn apply(&self, theme: Theme) -> Result<(), ThemeError> {
        use std::future::IntoFuture;
        use futures::FutureExt;

        let script = format!(
            "document.documentElement.classList.toggle({}, {}); document.documentElement.setAttribute('data-theme', {});",
            serde_json::to_string(DARK_CLASS).map_err(|e| ThemeError::Document(e.to_string()))?,
            theme.is_dark(),
            serde_json::to_string(&theme).map_err(|e| ThemeError::Document(e.to_string()))?
        );
        // Without a webview the eval settles immediately; a live one finishes later.
        let mut pending = dioxus::document::eval(&script).into_future();
        match (&mut pending).now_or_never() {
            Some(result) => result.map(|_| ()).map_err(|e| ThemeError::Document(e.to_string())),
            None => {
                dioxus::prelude::spawn(async move {
                    if let Err(e) = pending.await {
                        log::warn!("Theme script failed in the webview: {}", e);
                    }
                });
                Ok(())
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn theme_root() -> Box<dyn ThemeRoot> {
    Box::new(DocumentRoot)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn theme_root() -> Box<dyn ThemeRoot> {
    Box::new(WebviewRoot)
}

/// Smoothly scrolls the element with id `anchor` into view. Unknown anchors
/// are ignored.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_section(anchor: &str) {
    use web_sys::{ ScrollBehavior, ScrollIntoViewOptions };

    let element = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(anchor));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("No section with id {:?}", anchor),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_section(anchor: &str) {
    match serde_json::to_string(anchor) {
        Ok(id) => {
            let script = format!(
                "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth' }});",
                id
            );
            let _ = dioxus::document::eval(&script);
        }
        Err(e) => log::debug!("Cannot scroll to {:?}: {}", anchor, e),
    }
}

use dioxus::prelude::*;
use crate::utils::{ preference_storage, theme_root, Theme, ThemeStore };

/// What views get from `use_theme`: a reactive read of the current theme and
/// the capability to toggle it. Views never write the theme directly.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    current: Signal<Theme>,
    store: CopyValue<ThemeStore>,
}

impl ThemeHandle {
    /// Subscribes the calling component to theme changes.
    pub fn theme(&self) -> Theme {
        *self.current.read()
    }

    pub fn toggle(&self) {
        let mut store = self.store;
        store.write().toggle();
    }
}

pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}

/// Builds the page's single `ThemeStore` and shares it with every descendant.
#[component]
pub fn ThemeProvider(storage_key: String, children: Element) -> Element {
    use_context_provider(move || {
        let mut store = ThemeStore::load(storage_key, preference_storage(), theme_root());
        let mut current = Signal::new(store.theme());
        store.subscribe(move |theme| current.set(theme));

        ThemeHandle {
            current,
            store: CopyValue::new(store),
        }
    });

    rsx! {
        {children}
    }
}

/// Application root that carries the theme class.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: if theme.theme().is_dark() { "app dark" } else { "app" },
            "data-theme": theme.theme().as_str(),
            {children}
        }
    }
}

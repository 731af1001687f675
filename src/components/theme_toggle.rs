use dioxus::prelude::*;
use crate::utils::Theme;
use super::icons::{ Icon, IconKind };
use super::theme_provider::use_theme;

/// The control shown for a given theme: it offers the other theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleAffordance {
    pub icon: IconKind,
    pub label: &'static str,
    pub test_id: &'static str,
}

pub fn toggle_affordance(theme: Theme) -> ToggleAffordance {
    match theme {
        Theme::Light =>
            ToggleAffordance {
                icon: IconKind::Moon,
                label: "Switch to dark mode",
                test_id: "icon-moon",
            },
        Theme::Dark =>
            ToggleAffordance {
                icon: IconKind::Sun,
                label: "Switch to light mode",
                test_id: "icon-sun",
            },
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let affordance = toggle_affordance(theme.theme());

    rsx! {
        button {
            class: "btn btn-ghost btn-icon",
            "data-testid": "button-theme-toggle",
            aria_label: "Toggle theme",
            title: affordance.label,
            onclick: move |_| theme.toggle(),
            Icon { kind: affordance.icon, test_id: affordance.test_id }
        }
    }
}

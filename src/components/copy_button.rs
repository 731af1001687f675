use dioxus::prelude::*;
use crate::configs::SiteConfig;
use crate::utils::{ copy_text, sleep, CopyFeedback };
use super::icons::{ Icon, IconKind };

/// Copies `text` and shows "Copied!" for the configured feedback window.
#[component]
pub fn CopyButton(text: &'static str, test_id: &'static str) -> Element {
    let config = use_context::<SiteConfig>();
    let mut feedback = use_signal(CopyFeedback::default);

    let on_copy = move |_| {
        let reset_after = config.copy_feedback_ms;
        spawn(async move {
            match copy_text(text).await {
                Ok(()) => {
                    let ticket = feedback.write().mark_copied();
                    sleep(reset_after).await;
                    feedback.write().expire(ticket);
                }
                Err(e) => log::warn!("Copy to clipboard failed: {}", e),
            }
        });
    };

    rsx! {
        button { class: "btn btn-outline btn-sm", "data-testid": test_id, onclick: on_copy,
            if feedback.read().is_copied() {
                Icon { kind: IconKind::Check, class: "icon-sm" }
                "Copied!"
            } else {
                Icon { kind: IconKind::Copy, class: "icon-sm" }
                "Copy"
            }
        }
    }
}

use dioxus::prelude::*;

/// Single-open, collapsible: clicking the open item closes it, clicking any
/// other item opens it instead.
pub fn next_open(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(open) if open == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

#[derive(Clone, Copy)]
struct OpenItem(Signal<Option<String>>);

#[component]
pub fn Accordion(test_id: &'static str, children: Element) -> Element {
    use_context_provider(|| OpenItem(Signal::new(None)));

    rsx! {
        div { class: "accordion", "data-testid": test_id, {children} }
    }
}

#[component]
pub fn AccordionItem(value: &'static str, title: &'static str, children: Element) -> Element {
    let OpenItem(mut open) = use_context::<OpenItem>();
    let expanded = open.read().as_deref() == Some(value);

    rsx! {
        div { class: "accordion-item",
            button {
                class: "accordion-trigger",
                aria_expanded: "{expanded}",
                onclick: move |_| {
                    let next = next_open(open.read().as_deref(), value);
                    open.set(next);
                },
                span { "{title}" }
                span { class: if expanded { "chevron chevron-open" } else { "chevron" }, "⌄" }
            }
            if expanded {
                div { class: "accordion-content", {children} }
            }
        }
    }
}

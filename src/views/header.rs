use dioxus::prelude::*;
use crate::components::{ Icon, IconKind, ThemeToggle };
use crate::configs::SiteConfig;
use crate::content::Section;
use crate::utils::scroll_to_section;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

#[component]
pub fn Header() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        header { class: "site-header",
            div { class: "container header-inner",
                div { class: "header-left",
                    h1 { class: "brand", "AgentFlux" }
                    nav { class: "header-nav",
                        for section in Section::ALL {
                            button {
                                class: "nav-link",
                                "data-testid": section.nav_test_id(),
                                onclick: move |_| scroll_to_section(section.anchor()),
                                {section.label()}
                            }
                        }
                    }
                }
                div { class: "header-right",
                    a {
                        href: config.paper_url.clone(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "data-testid": "link-paper",
                        span { class: "btn btn-ghost btn-sm",
                            Icon { kind: IconKind::FileText, class: "icon-sm" }
                            "Paper"
                        }
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}

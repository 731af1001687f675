use dioxus::prelude::*;
use crate::components::CopyButton;
use crate::configs::SiteConfig;
use crate::content::{ Section, ARXIV_ID, BIBTEX, PAPER_TITLE };

#[component]
pub fn Citation() -> Element {
    rsx! {
        section { id: Section::Citation.anchor(), class: "section",
            div { class: "container",
                h2 { class: "section-title", "data-testid": "text-citation-heading", "Citation" }
                div { class: "card",
                    div { class: "citation-header",
                        h3 { class: "card-heading", "BibTeX" }
                        CopyButton { text: BIBTEX, test_id: "button-copy-bibtex" }
                    }
                    pre { class: "bibtex", "data-testid": "text-bibtex", "{BIBTEX}" }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let short_title = PAPER_TITLE.replace("A Framework for ", "");

    rsx! {
        footer { class: "site-footer",
            div { class: "container center small muted",
                p { "{short_title}" }
                p {
                    "Paper: "
                    a {
                        class: "link",
                        href: config.paper_url.clone(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "arXiv:{ARXIV_ID}"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use crate::components::{ Icon, IconKind };
use crate::configs::SiteConfig;

const ADAPTERS: [(&str, &str); 3] = [
    ("Tool Selector Adapter", "Classification: Which tool to invoke?"),
    ("Argument Generator Adapter", "Generation: Tool-specific arguments"),
    ("On-Device Execution", "Privacy-preserving orchestration"),
];

#[component]
pub fn Hero() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        section { class: "section hero",
            div { class: "container center stack",
                h1 { class: "hero-title", "data-testid": "text-hero-title",
                    "AgentFlux: A Framework for Privacy-Preserving"
                    br {}
                    "On-Device Agentic Systems"
                }
                p { class: "hero-lead muted", "data-testid": "text-hero-description",
                    "We introduce a framework for privacy-preserving, on-device AI agent workloads. By decoupling agentic tasks into function selection and argument generation, both tackled by local LLM orchestration, our system delivers accuracy approaching cloud-based models while fully protecting user data from third-party exposure and enabling cost-efficient execution on consumer hardware."
                }

                figure { class: "figure", "data-testid": "diagram-hero-architecture",
                    div { class: "panel panel-accent",
                        div { class: "grid grid-3",
                            for (idx, (title, caption)) in ADAPTERS.iter().enumerate() {
                                div { class: "card card-hover center",
                                    div { class: "step-badge", {(idx + 1).to_string()} }
                                    h4 { class: "card-title", "{title}" }
                                    p { class: "small muted", "{caption}" }
                                }
                            }
                        }
                        p { class: "figure-note", "AgentFlux: Decoupled Post-Training Pipeline & Inference Framework" }
                    }
                    figcaption { class: "caption",
                        "Figure 1: AgentFlux architecture overview showing the two-phase decoupled approach with specialized LoRA adapters"
                    }
                }

                div { class: "button-row",
                    a {
                        href: config.paper_url.clone(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "data-testid": "button-paper-hero",
                        span { class: "btn btn-primary btn-lg",
                            Icon { kind: IconKind::FileText }
                            "Read Paper"
                        }
                    }
                    button { class: "btn btn-outline btn-lg", disabled: true, "data-testid": "button-code",
                        Icon { kind: IconKind::Github }
                        "Code (Coming Soon)"
                    }
                }
            }
        }
    }
}

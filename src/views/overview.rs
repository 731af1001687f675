use dioxus::prelude::*;
use crate::components::{ Icon, IconKind };
use crate::content::Section;

struct UseCase {
    test_id: &'static str,
    icon: IconKind,
    icon_test_id: &'static str,
    title: &'static str,
    body: &'static str,
}

const USE_CASES: [UseCase; 3] = [
    UseCase {
        test_id: "card-usecase-blockchain",
        icon: IconKind::DollarSign,
        icon_test_id: "icon-blockchain",
        title: "Blockchains & Financial Applications",
        body: "AgentFlux enables local consolidation, analysis, and reporting across blockchain and traditional finance, keeping all private data on-device. Only anonymized outputs leave the user's machine.",
    },
    UseCase {
        test_id: "card-usecase-browsers",
        icon: IconKind::Globe,
        icon_test_id: "icon-browsers",
        title: "AI Browsers",
        body: "Local models execute privacy-preserving tasks for sensitive data while collaborating with cloud models for large public data like web search summarization.",
    },
    UseCase {
        test_id: "card-usecase-coding",
        icon: IconKind::Code,
        icon_test_id: "icon-coding",
        title: "Developer Terminals & Coding Agents",
        body: "AgentFlux addresses data leakage in coding assistants by executing parts locally and cost-efficiently while maintaining access to entire codebases.",
    },
];

#[component]
pub fn Introduction() -> Element {
    rsx! {
        section { id: Section::Introduction.anchor(), class: "section",
            div { class: "container",
                h2 { class: "section-title", "data-testid": "text-intro-heading", "Introduction" }
                div { class: "panel panel-accent",
                    p { class: "lead",
                        "AI systems are rapidly expanding from chatbots and media generation to robotics and financial applications. Leading AI platforms run in the cloud, sending all user queries—often including sensitive context like code, preferences, and past interactions—to third-party providers."
                    }
                    div { class: "grid grid-2",
                        div {
                            div { class: "icon-heading",
                                Icon { kind: IconKind::ShieldCheck, class: "icon text-destructive", test_id: "icon-privacy-challenge" }
                                h3 { "Privacy Challenge" }
                            }
                            p { class: "muted",
                                "User data, including medical and financial records, is routinely exposed to cloud providers."
                            }
                        }
                        div {
                            div { class: "icon-heading",
                                Icon { kind: IconKind::Zap, class: "icon text-destructive", test_id: "icon-cost-latency" }
                                h3 { "Cost & Latency" }
                            }
                            p { class: "muted",
                                "Cloud APIs charge per token and throttle requests, with true steady-state costs still unknown."
                            }
                        }
                    }
                }
                div { class: "card",
                    h3 { class: "card-heading", "The Solution: Edge Computing with AgentFlux" }
                    p { class: "muted",
                        "AgentFlux introduces a new framework for edge computing that partitions workloads into two distinct tasks: selection of functions that need to be called, and argument generation. This partitioning allows for a hierarchical architecture that achieves end-to-end accuracy comparable with state-of-the-art cloud models while maintaining the benefits of privacy and performance on consumer-grade GPUs."
                    }
                }
            }
        }
    }
}

#[component]
pub fn UseCases() -> Element {
    rsx! {
        section { class: "section section-muted",
            div { class: "container",
                h2 { class: "section-title", "data-testid": "text-usecases-heading", "Motivating Use Cases" }
                div { class: "grid grid-3",
                    for case in USE_CASES.iter() {
                        div { class: "card", "data-testid": case.test_id,
                            Icon { kind: case.icon, class: "icon-lg text-primary", test_id: case.icon_test_id }
                            h3 { class: "card-heading", "{case.title}" }
                            p { class: "small muted", "{case.body}" }
                        }
                    }
                }
                div { class: "card",
                    h3 { class: "card-heading center", "System Demonstration" }
                    div { class: "video-placeholder", "data-testid": "video-demo-placeholder",
                        div { class: "center stack-sm",
                            div { class: "play-badge",
                                svg { class: "icon text-primary", view_box: "0 0 24 24", fill: "currentColor",
                                    path { d: "M8 5v14l11-7z" }
                                }
                            }
                            p { class: "small strong", "Video Demo Coming Soon" }
                            p { class: "tiny muted",
                                "Watch AgentFlux in action as it orchestrates privacy-preserving tool calling across multiple applications"
                            }
                        }
                    }
                    p { class: "caption",
                        "Demo: AgentFlux performing file manipulations, Notion integrations, and Monday.com tasks on-device"
                    }
                }
            }
        }
    }
}

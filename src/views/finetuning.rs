use dioxus::prelude::*;
use crate::components::{ Accordion, AccordionItem, Icon, IconKind };

const HIERARCHY: [(&str, &str); 3] = [
    (
        "Toolset Selection (High-Level Routing)",
        "The base model decides which toolset (e.g., Filesystem, Notion, Monday.com) is relevant.",
    ),
    ("Tool Selection (Within Toolset)", "A specialized LoRA adapter for that toolset selects the exact tool to invoke."),
    ("Argument Generation", "The LoRA adapter for the chosen tool generates its arguments."),
];

const DATASET_STAGES: [(&str, &str); 3] = [
    (
        "Tool-Calling Trace Generation",
        "GPT-5-mini generates complete workflows with correct tool selections and arguments for each application domain.",
    ),
    (
        "Balanced Coverage",
        "Automated sampling ensures all tools receive proportional training examples, preventing bias toward frequently-used tools.",
    ),
    (
        "Quality Filtering",
        "Validation checks ensure syntactic correctness and semantic relevance of generated tool calls.",
    ),
];

#[component]
pub fn DecoupledFineTuning() -> Element {
    rsx! {
        section { class: "section",
            div { class: "container stack",
                h2 { class: "section-title", "data-testid": "text-finetuning-heading",
                    "The Core Idea: Decoupled Fine-Tuning"
                }
                div { class: "card",
                    p { class: "lead",
                        "AgentFlux (also known as DualTune) introduces "
                        strong { "decoupled fine-tuning" }
                        ", a two-stage post-training method that isolates the subtasks of tool calling into specialized components."
                    }
                    div { class: "grid grid-2",
                        div { class: "panel panel-accent",
                            h4 { "1. Tool Selection Adapter" }
                            ul { class: "bullets small muted",
                                li { "Trained as a classifier that identifies which tool to call next" }
                                li { "Uses loss masking to optimize only over the tool name tokens" }
                            }
                        }
                        div { class: "panel panel-accent",
                            h4 { "2. Argument Generation Adapter" }
                            ul { class: "bullets small muted",
                                li { "Trained individually for each tool to generate well-structured arguments" }
                                li { "Uses masking over argument tokens only, ensuring syntactic precision" }
                            }
                        }
                    }
                    div { class: "panel panel-primary",
                        p { class: "small",
                            "Each adapter is a lightweight "
                            strong { "LoRA module" }
                            ", enabling fast swap-in/out at inference time. The dataset pipeline automatically generates synthetic tool-calling traces using GPT-5-mini, producing balanced and diverse data across all tools."
                        }
                    }
                }

                Accordion { test_id: "accordion-technical-details",
                    AccordionItem { value: "hierarchical-orchestration", title: "Hierarchical Orchestration for Scalability",
                        p { class: "muted",
                            "To handle large toolsets without overwhelming the attention span of local models, AgentFlux employs hierarchical orchestration:"
                        }
                        for (idx, (title, detail)) in HIERARCHY.iter().enumerate() {
                            div { class: "pipeline-step",
                                div { class: "step-number step-number-sm", {(idx + 1).to_string()} }
                                div {
                                    h4 { "{title}" }
                                    p { class: "small muted", "{detail}" }
                                }
                            }
                        }
                        div { class: "panel panel-primary",
                            p { class: "small",
                                "This hierarchy "
                                strong { "shortens context length, improves accuracy, and allows the system to scale to dozens of tools" }
                                " without slowing down inference."
                            }
                        }
                    }
                    AccordionItem { value: "dataset-pipeline", title: "Dataset Generation Pipeline",
                        p { class: "muted",
                            "AgentFlux uses an automated synthetic data generation pipeline powered by frontier models to create high-quality training examples:"
                        }
                        for (title, detail) in DATASET_STAGES.iter() {
                            div { class: "panel panel-accent",
                                h4 { "{title}" }
                                p { class: "small muted", "{detail}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn WhyItMatters() -> Element {
    let pillars = [
        (IconKind::Lock, "icon-privacy", "Privacy-Preserving AI", "Agents that run fully offline, protecting sensitive user data"),
        (IconKind::Zap, "icon-efficiency", "Efficient Orchestration", "No reasoning latency overhead, fast execution on consumer hardware"),
        (IconKind::Wrench, "icon-scalable", "Scalable & Modular", "Training for tool ecosystems that evolve over time"),
    ];

    rsx! {
        section { class: "section section-muted",
            div { class: "container stack center",
                h2 { class: "section-title", "data-testid": "text-impact-heading", "Why It Matters" }
                p { class: "lead muted",
                    "AgentFlux bridges the performance gap between frontier orchestration models and local deployable systems."
                }
                div { class: "grid grid-3",
                    for (kind, test_id, title, body) in pillars {
                        div { class: "card center",
                            div { class: "pillar-badge",
                                Icon { kind, class: "icon-lg text-primary", test_id }
                            }
                            h3 { class: "card-heading", "{title}" }
                            p { class: "small muted", "{body}" }
                        }
                    }
                }
                div { class: "panel panel-primary",
                    p { class: "lead",
                        "By decoupling fine-tuning and introducing dynamic adapter loading, "
                        strong { "AgentFlux democratizes agentic AI" }
                        ", bringing practical autonomy to the edge."
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use crate::content::Section;

const PIPELINE: [(&str, &str); 4] = [
    ("Toolset Selection", "Base model routes to relevant toolset (Filesystem, Notion, Monday.com)"),
    (
        "Tool Selection (Classification)",
        "Load Tool Selector LoRA adapter → Classify which specific tool to invoke",
    ),
    ("Argument Generation", "Load Argument Generator LoRA adapter → Generate precise, structured arguments"),
    (
        "Tool Execution",
        "Execute in containerized sandbox → Return observation → Continue or summarize",
    ),
];

#[component]
pub fn Architecture() -> Element {
    rsx! {
        section { id: Section::Architecture.anchor(), class: "section",
            div { class: "container stack",
                h2 { class: "section-title", "data-testid": "text-architecture-heading", "Core Architecture" }
                div { class: "card",
                    p { class: "lead",
                        "Agentic systems autonomously solve complex tasks through iterative cycles: decomposing goals into discrete steps, executing each by invoking external tools, and dynamically adjusting based on tool outputs. Success hinges on "
                        strong { "LLM orchestration" }
                        "—the system's ability to accurately select the right tool and generate correct arguments at each decision point."
                    }
                    p { class: "lead",
                        "AgentFlux fundamentally reimagines this orchestration. Rather than relying on a monolithic LLM orchestrator, it employs "
                        strong { "multiple specialized LoRA adapters" }
                        " trained through a decoupled post-training pipeline and coordinated by a novel inference framework."
                    }
                }
                div { class: "grid grid-2",
                    div { class: "panel panel-accent",
                        h3 { class: "card-heading", "Post-Training Pipeline" }
                        h4 { "1. Tool Selector Adapter" }
                        p { class: "small muted",
                            "Functions as a classifier, identifying the optimal tool for each workflow step during inference."
                        }
                        h4 { "2. Argument Generator Adapter" }
                        p { class: "small muted",
                            "Produces precise, context-appropriate arguments for the selected tool at each step."
                        }
                    }
                    div { class: "panel panel-accent",
                        h3 { class: "card-heading", "Decoupled Inference Framework" }
                        h4 { "Classification Sub-Step" }
                        p { class: "small muted",
                            "Dynamically loads the tool selector adapter to determine which tool to invoke."
                        }
                        h4 { "Argument Generation Sub-Step" }
                        p { class: "small muted",
                            "Dynamically loads the corresponding argument generator adapter to construct the tool's input parameters."
                        }
                    }
                }
                div { class: "panel panel-primary",
                    p {
                        strong { "This modular, two-phase approach" }
                        " enables precise, adaptive orchestration while maintaining the efficiency and privacy benefits of local execution."
                    }
                }
                figure { class: "figure", "data-testid": "diagram-inference-pipeline",
                    h3 { class: "card-heading center", "Inference Pipeline Flow" }
                    div { class: "card pipeline",
                        for (idx, (title, detail)) in PIPELINE.iter().enumerate() {
                            if idx > 0 {
                                div { class: "pipeline-connector" }
                            }
                            div { class: "pipeline-step",
                                div { class: "step-number", {(idx + 1).to_string()} }
                                div { class: "pipeline-body card-hover",
                                    h4 { "{title}" }
                                    p { class: "small muted", "{detail}" }
                                }
                            }
                        }
                    }
                    figcaption { class: "caption",
                        "Figure 2: Complete inference pipeline showing hierarchical orchestration with dynamic LoRA adapter loading"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use crate::components::{ BarChart, ChartSpec, DataTable, Series, TableRow };
use crate::content::{
    application_results,
    baseline_results,
    decoupled_results,
    ApplicationRow,
    BaselineRow,
    DecoupledRow,
    Section,
};

const PRIMARY: &str = "hsl(var(--primary))";
const ACCENT: &str = "hsl(var(--accent))";
const NOTION: &str = "hsl(217 91% 70%)";

pub fn baseline_table() -> Vec<TableRow> {
    baseline_results()
        .iter()
        .map(|row| TableRow { cells: row.cells(), highlighted: row.highlighted() })
        .collect()
}

pub fn baseline_chart() -> ChartSpec {
    let rows = baseline_results();
    ChartSpec {
        categories: rows.iter().map(|r| r.model).collect(),
        series: vec![Series {
            name: "ToolFit",
            color: PRIMARY,
            values: rows.iter().map(|r| r.tool_fit).collect(),
        }],
        y_label: "ToolFit Accuracy (%)",
        height: 350.0,
        label_space: 100.0,
    }
}

pub fn decoupled_table() -> Vec<TableRow> {
    decoupled_results()
        .iter()
        .map(|row| TableRow { cells: row.cells(), highlighted: row.highlighted })
        .collect()
}

pub fn decoupled_chart() -> ChartSpec {
    let rows = decoupled_results();
    ChartSpec {
        categories: rows.iter().map(|r| r.config).collect(),
        series: vec![Series {
            name: "ToolFit",
            color: ACCENT,
            values: rows.iter().map(|r| r.tool_fit).collect(),
        }],
        y_label: "ToolFit Accuracy (%)",
        height: 350.0,
        label_space: 100.0,
    }
}

pub fn application_table() -> Vec<TableRow> {
    application_results()
        .iter()
        .map(|row| TableRow { cells: row.cells(), highlighted: row.highlighted })
        .collect()
}

pub fn application_chart() -> ChartSpec {
    let rows = application_results();
    ChartSpec {
        categories: rows.iter().map(|r| r.model).collect(),
        series: vec![
            Series {
                name: "Filesystem",
                color: PRIMARY,
                values: rows.iter().map(|r| r.filesystem).collect(),
            },
            Series {
                name: "Monday.com",
                color: ACCENT,
                values: rows.iter().map(|r| r.monday).collect(),
            },
            Series {
                name: "Notion",
                color: NOTION,
                values: rows.iter().map(|r| r.notion).collect(),
            }
        ],
        y_label: "Accuracy (%)",
        height: 400.0,
        label_space: 90.0,
    }
}

#[component]
pub fn Results() -> Element {
    rsx! {
        section { id: Section::Results.anchor(), class: "section section-muted",
            div { class: "container stack",
                h2 { class: "section-title", "data-testid": "text-results-heading", "Key Results" }

                div { class: "card",
                    h3 { class: "card-heading", "Performance on MCP-Bench" }
                    p { class: "muted",
                        "AgentFlux delivers significantly higher accuracy compared to off-the-shelf local LLMs. On the MCP-Bench benchmark for file manipulations, "
                        strong { "AgentFlux improves the base model accuracy from 16% to 61.5%" }
                        ", approaching GPT-5-mini's 88.5% accuracy."
                    }
                    DataTable {
                        headers: BaselineRow::HEADERS.to_vec(),
                        rows: baseline_table(),
                        test_id: "table-baseline-results",
                    }
                    BarChart { spec: baseline_chart(), test_id: "chart-baseline-performance" }
                }

                div { class: "card",
                    h3 { class: "card-heading", "Decoupled Analysis" }
                    p { class: "muted",
                        "The performance bottleneck is primarily in tool selection. Tool selection and argument generation fundamentally differ in their nature and benefit from different optimizations."
                    }
                    DataTable {
                        headers: DecoupledRow::HEADERS.to_vec(),
                        rows: decoupled_table(),
                        test_id: "table-decoupled-analysis",
                    }
                    BarChart { spec: decoupled_chart(), test_id: "chart-decoupled-analysis" }
                }

                div { class: "card",
                    h3 { class: "card-heading", "AgentFlux Performance Across Applications" }
                    p { class: "muted",
                        "DualTuneModel-7B (AgentFlux with Qwen-2.5-7B) was evaluated on multiple real-world applications including Filesystem, Monday.com, and Notion integrations."
                    }
                    DataTable {
                        headers: ApplicationRow::HEADERS.to_vec(),
                        rows: application_table(),
                        test_id: "table-application-results",
                    }
                    BarChart { spec: application_chart(), test_id: "chart-application-performance" }
                    div { class: "panel panel-primary",
                        p { strong { "Key Highlights:" } }
                        ul { class: "bullets",
                            li {
                                "AgentFlux improves tool-calling accuracy by up to "
                                strong { "60%" }
                                " over the base model"
                            }
                            li {
                                "Matches or exceeds reasoning models "
                                strong { "2× its size" }
                                ", but with lower latency"
                            }
                            li {
                                "Decoupled fine-tuning "
                                strong { "doubles improvement" }
                                " over traditional fine-tuning on the same dataset"
                            }
                        }
                    }
                }
            }
        }
    }
}

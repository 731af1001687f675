use crate::content::{
    application_results,
    baseline_results,
    decoupled_results,
    Flag,
    Section,
    BIBTEX,
};
use crate::views::{ application_chart, application_table, baseline_chart, baseline_table, decoupled_table };

#[test]
fn test_baseline_table_cells() {
    let rows = baseline_table();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].cells, vec!["Qwen-2.5-7B", "16.0", "No", "No"]);
    assert_eq!(rows[4].cells, vec!["Qwen-3-8B", "52.3", "Yes", "No"]);
    assert_eq!(rows[5].cells, vec!["GPT-5-mini", "88.5", "-", "Yes"]);

    let highlighted: Vec<_> = rows.iter().filter(|r| r.highlighted).collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].cells[0], "GPT-5-mini");
}

#[test]
fn test_decoupled_bottleneck_row_is_highlighted() {
    let rows = decoupled_table();
    let highlighted: Vec<_> = rows.iter().filter(|r| r.highlighted).collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].cells, vec!["GPT-5-mini", "Qwen-2.5-7B", "60.8"]);

    let configs: Vec<_> = decoupled_results().iter().map(|r| r.config).collect();
    assert_eq!(configs, vec!["Both Local", "Frontier Args", "Frontier Selection", "Both Frontier"]);
}

#[test]
fn test_application_cells_carry_percent() {
    let rows = application_table();
    assert_eq!(rows[0].cells, vec!["DualTuneModel-7B", "61.5%", "43.2%", "71.8%", "No"]);
    assert_eq!(rows[3].cells[4], "-");
    assert!(rows[0].highlighted);
    assert_eq!(application_results()[2].reasoning, Flag::Yes);
}

#[test]
fn test_charts_follow_the_tables() {
    let chart = baseline_chart();
    assert_eq!(chart.categories.len(), baseline_results().len());
    assert_eq!(chart.series[0].values[1], 34.2);

    let apps = application_chart();
    assert_eq!(apps.series.len(), 3);
    let names: Vec<_> = apps.series.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Filesystem", "Monday.com", "Notion"]);
    assert_eq!(apps.layout().axis_max, 100.0);
}

#[test]
fn test_navigation_sections() {
    let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
    assert_eq!(anchors, vec!["introduction", "architecture", "results", "citation"]);
    assert_eq!(Section::Results.nav_test_id(), "nav-results");
    assert_eq!(Section::Citation.label(), "Citation");
}

#[test]
fn test_bibtex_entry() {
    assert!(BIBTEX.starts_with("@article{agentflux2024,"));
    assert!(BIBTEX.contains("journal={arXiv preprint arXiv:2510.00229}"));
    assert!(BIBTEX.ends_with('}'));
    assert_eq!(BIBTEX.lines().count(), 6);
}

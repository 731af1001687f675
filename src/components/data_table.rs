use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub highlighted: bool,
}

/// Plain results table; the first column is rendered as the row label.
#[component]
pub fn DataTable(headers: Vec<&'static str>, rows: Vec<TableRow>, test_id: &'static str) -> Element {
    rsx! {
        div { class: "table-wrap",
            table { class: "data-table", "data-testid": test_id,
                thead {
                    tr {
                        for header in headers.iter() {
                            th { "{header}" }
                        }
                    }
                }
                tbody {
                    for (idx, row) in rows.iter().enumerate() {
                        tr {
                            key: "{idx}",
                            class: if row.highlighted { "row-highlight" } else { "" },
                            for (col, cell) in row.cells.iter().enumerate() {
                                td { class: if col == 0 { "cell-label" } else { "cell-value" }, "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

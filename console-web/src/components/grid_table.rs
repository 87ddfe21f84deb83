//! Dense tabular layout with checkbox selection and the bulk assignment
//! actions.

use std::collections::HashMap;

use dioxus::prelude::*;

use console_domain::{group_of, selectable, visible_columns, ColumnDescriptor, Row};

use crate::components::cells::CellView;

#[component]
pub fn GridTable(
    rows: Vec<Row>,
    overrides: Signal<HashMap<String, bool>>,
    selected: Signal<Vec<String>>,
    assigning: bool,
    row_busy: Option<String>,
    bulk_picker_enabled: bool,
    bulk_packer_enabled: bool,
    on_assign_picker_bulk: Callback<()>,
    on_open_packer_dialog: Callback<()>,
    on_assign_picker_row: Callback<String>,
    on_assign_packer_row: Callback<String>,
    on_download_label: Callback<String>,
    on_open_detail: Callback<String>,
) -> Element {
    let columns = visible_columns(&overrides.read());
    let column_count = columns.len() + 1;
    let group_spans = group_header_spans(&columns);

    rsx! {
        div { class: "grid-table-wrap",
            table { class: "grid-table",
                thead {
                    tr {
                        th { class: "grid-check-col" }
                        for (header, span) in group_spans.iter() {
                            th { class: "grid-group-header", colspan: "{span}", "{header}" }
                        }
                    }
                    tr {
                        th { class: "grid-check-col" }
                        for col in columns.iter() {
                            th { "{col.header}" }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "grid-empty", colspan: "{column_count}", "No results" }
                        }
                    }
                    for (index, row) in rows.iter().enumerate() {
                        GridRow {
                            key: "{row.id}",
                            row: row.clone(),
                            columns: columns.clone(),
                            stripe_odd: index % 2 == 1,
                            selected,
                            busy: assigning || row_busy.as_deref() == Some(row.id.as_str()),
                            on_assign_picker_row,
                            on_assign_packer_row,
                            on_download_label,
                            on_open_detail,
                        }
                    }
                }
            }
        }
        div { class: "grid-actions",
            button {
                class: "action-primary",
                disabled: !bulk_picker_enabled,
                onclick: move |_| on_assign_picker_bulk.call(()),
                if assigning { "Processing…" } else { "Assign Picker" }
            }
            button {
                class: "action-primary",
                disabled: !bulk_packer_enabled,
                onclick: move |_| on_open_packer_dialog.call(()),
                "Select Packer"
            }
        }
    }
}

/// Run-length encode the namespace group headers over the visible columns,
/// in display order.
fn group_header_spans(columns: &[&'static ColumnDescriptor]) -> Vec<(&'static str, usize)> {
    let mut spans: Vec<(&'static str, usize)> = Vec::new();
    for col in columns {
        let header = group_of(col.field).map(|group| group.header).unwrap_or("");
        match spans.last_mut() {
            Some((current, span)) if *current == header => *span += 1,
            _ => spans.push((header, 1)),
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_domain::column;

    #[test]
    fn group_spans_follow_visible_column_runs() {
        let columns = vec![
            column("sale_number").unwrap(),
            column("units").unwrap(),
            column("ad_driven_sale").unwrap(),
            column("buyer_name").unwrap(),
            column("buyer_state").unwrap(),
        ];
        let spans = group_header_spans(&columns);
        assert_eq!(
            spans,
            vec![("Sale", 2), ("Advertising", 1), ("Buyer", 2)]
        );
    }
}

#[component]
fn GridRow(
    row: Row,
    columns: Vec<&'static ColumnDescriptor>,
    stripe_odd: bool,
    selected: Signal<Vec<String>>,
    busy: bool,
    on_assign_picker_row: Callback<String>,
    on_assign_packer_row: Callback<String>,
    on_download_label: Callback<String>,
    on_open_detail: Callback<String>,
) -> Element {
    let mut selected = selected;
    let row_id = row.id.clone();
    let checked = selected.read().contains(&row_id);
    let lockout = !selectable(&row);
    let row_class = if stripe_odd { "grid-row odd" } else { "grid-row even" };

    let detail_id = row_id.clone();
    let toggle_id = row_id.clone();

    rsx! {
        tr {
            class: "{row_class}",
            onclick: move |_| on_open_detail.call(detail_id.clone()),

            td { class: "grid-check-col",
                input {
                    r#type: "checkbox",
                    checked: checked,
                    disabled: lockout,
                    onclick: move |evt| evt.stop_propagation(),
                    onchange: move |evt| {
                        let mut picked = selected.write();
                        if evt.checked() {
                            if !picked.contains(&toggle_id) {
                                picked.push(toggle_id.clone());
                            }
                        } else {
                            picked.retain(|existing| existing != &toggle_id);
                        }
                    },
                }
            }
            for col in columns.iter() {
                td { class: "grid-cell",
                    CellView {
                        row: row.clone(),
                        column: *col,
                        busy,
                        on_assign_picker: on_assign_picker_row,
                        on_assign_packer: on_assign_packer_row,
                        on_download_label,
                    }
                }
            }
        }
    }
}

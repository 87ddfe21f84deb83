//! Snap-scrolling card stream for narrow viewports. Same filtered rows,
//! same column registry, same eligibility rules as the table.

use std::collections::HashMap;

use dioxus::prelude::*;

use console_domain::{visible_columns, ColumnDescriptor, Row};

use crate::components::cells::CellView;

#[component]
pub fn CardStream(
    rows: Vec<Row>,
    overrides: Signal<HashMap<String, bool>>,
    loading: bool,
    row_busy: Option<String>,
    on_assign_picker_row: Callback<String>,
    on_assign_packer_row: Callback<String>,
    on_download_label: Callback<String>,
    on_open_detail: Callback<String>,
) -> Element {
    let mut active = use_signal(|| None::<String>);
    let columns = visible_columns(&overrides.read());

    rsx! {
        div { class: "card-stream",
            if loading && rows.is_empty() {
                div { class: "card-stream-empty", "Loading orders…" }
            } else if rows.is_empty() {
                div { class: "card-stream-empty", "No results" }
            }
            for row in rows.iter() {
                OrderCard {
                    key: "{row.id}",
                    row: row.clone(),
                    columns: columns.clone(),
                    active: active.read().as_deref() == Some(row.id.as_str()),
                    busy: row_busy.as_deref() == Some(row.id.as_str()),
                    on_activate: move |id: String| active.set(Some(id)),
                    on_assign_picker: on_assign_picker_row,
                    on_assign_packer: on_assign_packer_row,
                    on_download_label,
                    on_open_detail,
                }
            }
        }
    }
}

#[component]
fn OrderCard(
    row: Row,
    columns: Vec<&'static ColumnDescriptor>,
    active: bool,
    busy: bool,
    on_activate: Callback<String>,
    on_assign_picker: Callback<String>,
    on_assign_packer: Callback<String>,
    on_download_label: Callback<String>,
    on_open_detail: Callback<String>,
) -> Element {
    let row_id = row.id.clone();
    let title = row
        .cell_text("sale_number")
        .unwrap_or_else(|| row.id.clone());
    let status = row.cell_text("sale_status");
    let card_class = if active { "order-card active" } else { "order-card" };

    let activate_id = row_id.clone();
    let detail_id = row_id;

    rsx! {
        div {
            class: "{card_class}",
            onclick: move |_| on_activate.call(activate_id.clone()),

            div { class: "order-card-head",
                button {
                    class: "order-card-title",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_open_detail.call(detail_id.clone());
                    },
                    "{title}"
                }
            }
            if let Some(status) = status {
                span { class: "chip", "{status}" }
            }

            div { class: "order-card-fields",
                for col in columns.iter() {
                    div { class: "order-card-field",
                        span { class: "order-card-label", "{col.header}:" }
                        CellView {
                            row: row.clone(),
                            column: *col,
                            busy,
                            on_assign_picker,
                            on_assign_packer,
                            on_download_label,
                        }
                    }
                }
            }
        }
    }
}

//! Registry-driven cell rendering shared by both view layouts.

use dioxus::prelude::*;

use console_domain::{eligible_for_packer, CellRenderer, ColumnDescriptor, Row};

/// One grid cell, dispatched on the column's renderer tag so the
/// special-case fields behave identically in the table and the cards.
#[component]
pub fn CellView(
    row: Row,
    column: &'static ColumnDescriptor,
    busy: bool,
    on_assign_picker: Callback<String>,
    on_assign_packer: Callback<String>,
    on_download_label: Callback<String>,
) -> Element {
    match column.renderer {
        CellRenderer::Plain => {
            let text = row.cell_text(column.field);
            match text {
                Some(text) => rsx! { span { class: "cell-text", "{text}" } },
                None => rsx! { span { class: "cell-text cell-empty", "—" } },
            }
        }
        CellRenderer::StatusChip => {
            let text = row.cell_text(column.field);
            match text {
                Some(text) => rsx! { span { class: "chip", "{text}" } },
                None => rsx! { span { class: "cell-text cell-empty", "—" } },
            }
        }
        CellRenderer::PickerAssign => {
            if let Some(name) = row.cell_text("picker") {
                rsx! { span { class: "cell-text", "{name}" } }
            } else {
                let id = row.id.clone();
                rsx! {
                    button {
                        class: "cell-action",
                        disabled: busy,
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_assign_picker.call(id.clone());
                        },
                        if busy { "Assigning…" } else { "Assign" }
                    }
                }
            }
        }
        CellRenderer::PackerAssign => {
            if let Some(name) = row.cell_text("packer") {
                rsx! { span { class: "cell-text", "{name}" } }
            } else if eligible_for_packer(&row) {
                let id = row.id.clone();
                rsx! {
                    button {
                        class: "cell-action",
                        disabled: busy,
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_assign_packer.call(id.clone());
                        },
                        "Assign"
                    }
                }
            } else {
                // No packer until a picker has taken the order.
                rsx! { span { class: "cell-text cell-empty", "—" } }
            }
        }
        CellRenderer::LabelDownload => {
            if row.label_present() {
                let id = row.id.clone();
                rsx! {
                    button {
                        class: "cell-action cell-download",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_download_label.call(id.clone());
                        },
                        "Download"
                    }
                }
            } else {
                rsx! { span { class: "cell-text cell-empty", "—" } }
            }
        }
    }
}

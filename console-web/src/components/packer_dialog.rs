//! Modal selection of an active packer for one or more orders.

use dioxus::prelude::*;

use console_domain::PackerRecord;

/// Rows the dialog will assign to when confirmed; one id for the per-card
/// action, several for the bulk action.
#[derive(Debug, Clone, PartialEq)]
pub struct PackerDialogTarget {
    pub order_ids: Vec<String>,
}

#[component]
pub fn PackerDialog(
    target: PackerDialogTarget,
    packers: Vec<PackerRecord>,
    chosen: Signal<String>,
    assigning: bool,
    on_close: Callback<()>,
    on_confirm: Callback<()>,
) -> Element {
    let mut chosen = chosen;
    let count = target.order_ids.len();

    rsx! {
        div {
            class: "dialog-scrim",
            onclick: move |_| {
                if !assigning {
                    on_close.call(());
                }
            },
            div {
                class: "dialog",
                onclick: move |evt| evt.stop_propagation(),

                h3 { class: "dialog-title", "Select Packer" }
                if count > 1 {
                    p { class: "dialog-subtitle", "{count} orders selected" }
                }

                select {
                    class: "dialog-select",
                    value: "{chosen}",
                    onchange: move |evt| chosen.set(evt.value()),
                    option { value: "", "Packer" }
                    for (id, label) in packers.iter().map(|p| (p.id, p.choice_label())) {
                        option { value: "{id}", "{label}" }
                    }
                }

                div { class: "dialog-actions",
                    button {
                        class: "dialog-close",
                        disabled: assigning,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                    button {
                        class: "action-primary",
                        disabled: assigning,
                        onclick: move |_| on_confirm.call(()),
                        if assigning { "Assigning…" } else { "Assign" }
                    }
                }
            }
        }
    }
}

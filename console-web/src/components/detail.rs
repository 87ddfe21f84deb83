//! On-demand detail panel for a focused order: general info plus line
//! items, with label download.

use dioxus::prelude::*;

use console_domain::{column, normalize_row};

use crate::api::OrderDetail;

/// General-info fields shown above the line items, in display order.
const SUMMARY_FIELDS: &[&str] = &[
    "channel",
    "sale_date",
    "sale_status",
    "fulfillment_status",
    "picker",
    "packer",
    "units",
    "total_mxn",
    "buyer_name",
    "delivery_method",
    "carrier",
    "tracking_number",
];

#[component]
pub fn DetailPanel(
    detail: OrderDetail,
    on_close: Callback<()>,
    on_download_label: Callback<String>,
) -> Element {
    let row = normalize_row(detail.order.clone());
    let title = row
        .cell_text("sale_number")
        .unwrap_or_else(|| row.id.clone());
    let label_id = row.id.clone();

    rsx! {
        div { class: "detail-scrim", onclick: move |_| on_close.call(()),
            div {
                class: "detail-panel",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "detail-head",
                    h3 { "Sale {title}" }
                    if row.label_present() {
                        button {
                            class: "cell-action cell-download",
                            onclick: move |_| on_download_label.call(label_id.clone()),
                            "Download Label"
                        }
                    }
                    button { class: "dialog-close", onclick: move |_| on_close.call(()), "Close" }
                }

                div {
                    for field in SUMMARY_FIELDS.iter() {
                        if let Some(value) = row.cell_text(field) {
                            div { class: "detail-field",
                                span { {header_for(field)} }
                                span { "{value}" }
                            }
                        }
                    }
                }

                h4 { "Items" }
                if detail.items.is_empty() {
                    p { class: "detail-item-meta", "No items available" }
                }
                for item in detail.items.iter() {
                    div { class: "detail-item",
                        if let Some(thumbnail) = item.thumbnail.as_deref() {
                            img { src: "data:image/jpeg;base64,{thumbnail}" }
                        }
                        div {
                            if let Some(item_title) = item.title.as_deref() {
                                div { "{item_title}" }
                            }
                            div { class: "detail-item-meta",
                                {line_item_meta(item)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn header_for(field: &str) -> String {
    column(field)
        .map(|col| format!("{}:", col.header))
        .unwrap_or_else(|| format!("{field}:"))
}

fn line_item_meta(item: &crate::api::OrderLineItem) -> String {
    let mut parts = Vec::new();
    if let Some(sku) = item.sku.as_deref() {
        parts.push(format!("SKU {sku}"));
    }
    if let Some(listing_type) = item.listing_type.as_deref() {
        parts.push(listing_type.to_string());
    }
    if let Some(units) = item.units {
        parts.push(format!("{units} units"));
    }
    if let Some(unit_price) = item.unit_price {
        parts.push(format!("${unit_price} each"));
    }
    if let Some(total_price) = item.total_price {
        parts.push(format!("${total_price} total"));
    }
    parts.join(" · ")
}

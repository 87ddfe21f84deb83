//! Static column registry shared by the tabular grid and the card stream.
//!
//! Descriptors are immutable data loaded once at module initialization:
//! backend field name, header label, value kind (drives the filter operator
//! set), default visibility, and a renderer tag for the closed set of
//! special-case cells. Declaration order is display order.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
}

/// Closed set of cell renderers. Both view layouts dispatch on this tag
/// instead of duplicating per-field conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRenderer {
    Plain,
    StatusChip,
    PickerAssign,
    PackerAssign,
    LabelDownload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub field: &'static str,
    pub header: &'static str,
    pub kind: ColumnKind,
    pub visible: bool,
    pub renderer: CellRenderer,
}

const fn text(field: &'static str, header: &'static str, visible: bool) -> ColumnDescriptor {
    ColumnDescriptor {
        field,
        header,
        kind: ColumnKind::Text,
        visible,
        renderer: CellRenderer::Plain,
    }
}

const fn number(field: &'static str, header: &'static str, visible: bool) -> ColumnDescriptor {
    ColumnDescriptor {
        field,
        header,
        kind: ColumnKind::Number,
        visible,
        renderer: CellRenderer::Plain,
    }
}

const fn special(
    field: &'static str,
    header: &'static str,
    renderer: CellRenderer,
) -> ColumnDescriptor {
    ColumnDescriptor {
        field,
        header,
        kind: ColumnKind::Text,
        visible: true,
        renderer,
    }
}

pub static COLUMNS: &[ColumnDescriptor] = &[
    // Sale
    text("sale_number", "Sale No", true),
    text("channel", "Sales Channel", true),
    text("sale_date", "Sale Date", true),
    text("sale_status", "Sale Status", true),
    special("picker", "Picker", CellRenderer::PickerAssign),
    special("packer", "Packer", CellRenderer::PackerAssign),
    text("fulfillment_status", "Fulfillment", true),
    text("status_detail", "Status Detail", false),
    special("multi_item", "Multi-Item Package", CellRenderer::StatusChip),
    number("units", "Units", true),
    number("product_revenue", "Product Revenue", false),
    number("shipping_revenue", "Shipping Revenue", false),
    number("sale_fee", "Sale Fee", false),
    number("shipping_cost", "Shipping Cost", false),
    number("refunds", "Refunds (MXN)", false),
    number("total_mxn", "Total (MXN)", false),
    special("label", "Label", CellRenderer::LabelDownload),
    // Advertising
    text("ad_driven_sale", "Ad-Driven Sale", false),
    // Listing
    text("listing_sku", "SKU", false),
    text("listing_title", "Listing Title", false),
    text("listing_variant", "Variant", false),
    text("listing_type", "Listing Type", false),
    // Billing
    text("invoice_attached", "Invoice Attached", false),
    text("billing_name", "Billing Name", false),
    text("billing_document", "Billing Document", false),
    text("billing_address", "Billing Address", false),
    text("taxpayer_type", "Taxpayer Type", false),
    text("invoice_use", "Invoice Use", false),
    text("billing_account_type", "Account Type", false),
    text("tax_regime", "Tax Regime", false),
    // Buyer
    text("buyer_name", "Buyer", false),
    text("buyer_gov_id", "Buyer ID", false),
    text("buyer_address", "Buyer Address", false),
    text("buyer_municipality", "Municipality", false),
    text("buyer_state", "Buyer State", false),
    text("buyer_postal_code", "Postal Code", false),
    text("buyer_country", "Country", false),
    // Shipping
    text("delivery_method", "Delivery Method", false),
    text("shipped_at", "Shipped At", false),
    text("delivered_at", "Delivered At", false),
    text("carrier", "Carrier", false),
    text("tracking_number", "Tracking No", false),
    text("tracking_url", "Tracking URL", false),
    // Returns
    number("return_units", "Returned Units", false),
    text("return_delivery_method", "Return Delivery", false),
    text("return_shipped_at", "Return Shipped At", false),
    text("return_delivered_at", "Return Delivered At", false),
    text("return_carrier", "Return Carrier", false),
    text("return_tracking_number", "Return Tracking No", false),
    text("return_tracking_url", "Return Tracking URL", false),
    // Claims
    number("claim_units", "Units in Claims", false),
    text("claim_opened", "Claim Opened", false),
    text("claim_closed", "Claim Closed", false),
    text("claim_mediation", "With Mediation", false),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGroup {
    pub id: &'static str,
    pub header: &'static str,
    pub fields: &'static [&'static str],
}

pub static COLUMN_GROUPS: &[ColumnGroup] = &[
    ColumnGroup {
        id: "sale",
        header: "Sale",
        fields: &[
            "sale_number",
            "channel",
            "sale_date",
            "sale_status",
            "picker",
            "packer",
            "fulfillment_status",
            "status_detail",
            "multi_item",
            "units",
            "product_revenue",
            "shipping_revenue",
            "sale_fee",
            "shipping_cost",
            "refunds",
            "total_mxn",
            "label",
        ],
    },
    ColumnGroup {
        id: "advertising",
        header: "Advertising",
        fields: &["ad_driven_sale"],
    },
    ColumnGroup {
        id: "listing",
        header: "Listing",
        fields: &[
            "listing_sku",
            "listing_title",
            "listing_variant",
            "listing_type",
        ],
    },
    ColumnGroup {
        id: "billing",
        header: "Billing",
        fields: &[
            "invoice_attached",
            "billing_name",
            "billing_document",
            "billing_address",
            "taxpayer_type",
            "invoice_use",
            "billing_account_type",
            "tax_regime",
        ],
    },
    ColumnGroup {
        id: "buyer",
        header: "Buyer",
        fields: &[
            "buyer_name",
            "buyer_gov_id",
            "buyer_address",
            "buyer_municipality",
            "buyer_state",
            "buyer_postal_code",
            "buyer_country",
        ],
    },
    ColumnGroup {
        id: "shipping",
        header: "Shipping",
        fields: &[
            "delivery_method",
            "shipped_at",
            "delivered_at",
            "carrier",
            "tracking_number",
            "tracking_url",
        ],
    },
    ColumnGroup {
        id: "returns",
        header: "Returns",
        fields: &[
            "return_units",
            "return_delivery_method",
            "return_shipped_at",
            "return_delivered_at",
            "return_carrier",
            "return_tracking_number",
            "return_tracking_url",
        ],
    },
    ColumnGroup {
        id: "claims",
        header: "Claims",
        fields: &[
            "claim_units",
            "claim_opened",
            "claim_closed",
            "claim_mediation",
        ],
    },
];

pub fn column(field: &str) -> Option<&'static ColumnDescriptor> {
    COLUMNS.iter().find(|col| col.field == field)
}

pub fn group_of(field: &str) -> Option<&'static ColumnGroup> {
    COLUMN_GROUPS
        .iter()
        .find(|group| group.fields.contains(&field))
}

/// Columns to display: hidden when either the per-session override or the
/// descriptor default says so. Declaration order is preserved.
pub fn visible_columns(overrides: &HashMap<String, bool>) -> Vec<&'static ColumnDescriptor> {
    COLUMNS
        .iter()
        .filter(|col| match overrides.get(col.field) {
            Some(shown) => *shown,
            None => col.visible,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_fields_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for col in COLUMNS {
            assert!(seen.insert(col.field), "duplicate column {}", col.field);
        }
    }

    #[test]
    fn group_members_exist_in_registry() {
        for group in COLUMN_GROUPS {
            for field in group.fields {
                assert!(column(field).is_some(), "unknown field {field} in {}", group.id);
            }
        }
    }

    #[test]
    fn every_column_belongs_to_exactly_one_group() {
        for col in COLUMNS {
            let owners = COLUMN_GROUPS
                .iter()
                .filter(|group| group.fields.contains(&col.field))
                .count();
            assert_eq!(owners, 1, "column {} owned by {owners} groups", col.field);
        }
        assert_eq!(group_of("buyer_name").map(|g| g.id), Some("buyer"));
        assert!(group_of("nonexistent").is_none());
    }

    #[test]
    fn visible_columns_respects_defaults_and_order() {
        let visible = visible_columns(&HashMap::new());
        let fields: Vec<&str> = visible.iter().map(|c| c.field).collect();

        assert!(fields.contains(&"sale_number"));
        assert!(fields.contains(&"picker"));
        assert!(!fields.contains(&"status_detail"));

        // Declaration order survives filtering.
        let sale_number = fields.iter().position(|f| *f == "sale_number").unwrap();
        let picker = fields.iter().position(|f| *f == "picker").unwrap();
        assert!(sale_number < picker);
    }

    #[test]
    fn visibility_override_hides_and_reveals() {
        let mut overrides = HashMap::new();
        overrides.insert("channel".to_string(), false);
        overrides.insert("buyer_name".to_string(), true);

        let fields: Vec<&str> = visible_columns(&overrides).iter().map(|c| c.field).collect();
        assert!(!fields.contains(&"channel"));
        assert!(fields.contains(&"buyer_name"));
    }

    #[test]
    fn numeric_columns_are_tagged() {
        assert_eq!(column("units").unwrap().kind, ColumnKind::Number);
        assert_eq!(column("total_mxn").unwrap().kind, ColumnKind::Number);
        assert_eq!(column("sale_number").unwrap().kind, ColumnKind::Text);
    }
}

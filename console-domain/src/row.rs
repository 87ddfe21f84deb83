use serde::Deserialize;
use serde_json::{Map, Value};

/// Shipping-label column payload. The orders query returns either a
/// presence flag, inline base64 document content, or raw bytes; the actual
/// PDF always comes from the separate label-document fetch.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LabelField {
    Flag(bool),
    Content(String),
    Bytes(Vec<u8>),
}

impl LabelField {
    pub fn has_content(&self) -> bool {
        match self {
            LabelField::Flag(present) => *present,
            LabelField::Content(text) => !text.trim().is_empty(),
            LabelField::Bytes(bytes) => !bytes.is_empty(),
        }
    }
}

/// Wire shape of one order as returned by the orders query.
///
/// Only the fields the pipeline acts on are typed. The remaining display
/// columns (sale, buyer, shipping, billing, claims, returns, advertising,
/// listing namespaces) ride along untouched, keyed by column field name.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderRecord {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(default)]
    pub picker: Option<String>,
    #[serde(default)]
    pub packer: Option<String>,
    #[serde(default)]
    pub label: Option<LabelField>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One normalized grid row: the marketplace order id becomes the row id,
/// every other server field is carried over unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub picker: Option<String>,
    pub packer: Option<String>,
    pub label: Option<LabelField>,
    fields: Map<String, Value>,
}

pub fn normalize_row(record: OrderRecord) -> Row {
    Row {
        id: record.order_id,
        picker: record.picker,
        packer: record.packer,
        label: record.label,
        fields: record.fields,
    }
}

fn is_blank(value: &Option<String>) -> bool {
    match value.as_deref() {
        Some(text) => text.trim().is_empty(),
        None => true,
    }
}

impl Row {
    /// A blank or whitespace-only assignment counts as unset.
    pub fn picker_set(&self) -> bool {
        !is_blank(&self.picker)
    }

    pub fn packer_set(&self) -> bool {
        !is_blank(&self.packer)
    }

    pub fn label_present(&self) -> bool {
        self.label.as_ref().is_some_and(LabelField::has_content)
    }

    /// Resolve a cell by column field name. The assignment and label
    /// columns are typed on the row itself; everything else comes from the
    /// flattened field map.
    pub fn cell(&self, field: &str) -> Value {
        match field {
            "picker" => self
                .picker
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null),
            "packer" => self
                .packer
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null),
            "label" => Value::Bool(self.label_present()),
            _ => self.fields.get(field).cloned().unwrap_or(Value::Null),
        }
    }

    /// Display text for a cell; `None` when there is nothing to show.
    pub fn cell_text(&self, field: &str) -> Option<String> {
        let text = match self.cell(field) {
            Value::Null => return None,
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            other => other.to_string(),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> OrderRecord {
        serde_json::from_value(value).expect("order record should deserialize")
    }

    #[test]
    fn normalize_assigns_id_and_spreads_fields() {
        let row = normalize_row(record(json!({
            "orderId": "ML-1001",
            "picker": "Ana",
            "sale_number": "S-17",
            "units": 3,
        })));

        assert_eq!(row.id, "ML-1001");
        assert_eq!(row.picker.as_deref(), Some("Ana"));
        assert_eq!(row.cell("sale_number"), json!("S-17"));
        assert_eq!(row.cell("units"), json!(3));
    }

    #[test]
    fn blank_assignments_count_as_unset() {
        let row = normalize_row(record(json!({ "orderId": "1", "picker": "  " })));
        assert!(!row.picker_set());
        assert!(!row.packer_set());
    }

    #[test]
    fn cell_resolves_typed_assignment_fields() {
        let row = normalize_row(record(json!({ "orderId": "1", "picker": "A" })));
        assert_eq!(row.cell("picker"), json!("A"));
        assert_eq!(row.cell("packer"), Value::Null);
    }

    #[test]
    fn label_variants_report_content() {
        let flagged = normalize_row(record(json!({ "orderId": "1", "label": true })));
        let inline = normalize_row(record(json!({ "orderId": "2", "label": "JVBERi0x" })));
        let empty = normalize_row(record(json!({ "orderId": "3", "label": "  " })));
        let missing = normalize_row(record(json!({ "orderId": "4" })));

        assert!(flagged.label_present());
        assert!(inline.label_present());
        assert!(!empty.label_present());
        assert!(!missing.label_present());
    }

    #[test]
    fn cell_text_hides_null_and_blank_values() {
        let row = normalize_row(record(json!({
            "orderId": "1",
            "sale_status": "Delivered",
            "carrier": "",
            "units": 2,
        })));

        assert_eq!(row.cell_text("sale_status").as_deref(), Some("Delivered"));
        assert_eq!(row.cell_text("carrier"), None);
        assert_eq!(row.cell_text("tracking_url"), None);
        assert_eq!(row.cell_text("units").as_deref(), Some("2"));
    }
}

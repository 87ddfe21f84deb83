//! Client-side filter engine: at most one active predicate over the row set.
//!
//! The operator set is derived from the column's declared kind. Numeric
//! operators coerce both sides to numbers and exclude the row when either
//! coercion fails; text operators compare case-insensitively and treat
//! missing cells as the empty string.

use std::borrow::Cow;

use serde_json::Value;

use crate::columns::ColumnKind;
use crate::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Contains,
    Equals,
    StartsWith,
    EndsWith,
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

pub static TEXT_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Contains,
    FilterOperator::Equals,
    FilterOperator::StartsWith,
    FilterOperator::EndsWith,
];

pub static NUMBER_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Eq,
    FilterOperator::Ne,
    FilterOperator::Gt,
    FilterOperator::Ge,
    FilterOperator::Lt,
    FilterOperator::Le,
];

impl FilterOperator {
    pub fn label(self) -> &'static str {
        match self {
            FilterOperator::Contains => "contains",
            FilterOperator::Equals => "equals",
            FilterOperator::StartsWith => "startsWith",
            FilterOperator::EndsWith => "endsWith",
            FilterOperator::Eq => "=",
            FilterOperator::Ne => "!=",
            FilterOperator::Gt => ">",
            FilterOperator::Ge => ">=",
            FilterOperator::Lt => "<",
            FilterOperator::Le => "<=",
        }
    }

    pub fn from_label(label: &str) -> Option<FilterOperator> {
        TEXT_OPERATORS
            .iter()
            .chain(NUMBER_OPERATORS)
            .copied()
            .find(|op| op.label() == label)
    }

    pub fn is_numeric(self) -> bool {
        NUMBER_OPERATORS.contains(&self)
    }
}

/// Operator choices for a column of the given kind.
pub fn available_operators(kind: ColumnKind) -> &'static [FilterOperator] {
    match kind {
        ColumnKind::Text => TEXT_OPERATORS,
        ColumnKind::Number => NUMBER_OPERATORS,
    }
}

/// Switching the filter field resets the operator to this.
pub fn default_operator(kind: ColumnKind) -> FilterOperator {
    available_operators(kind)[0]
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterPredicate {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

/// Narrow `rows` by the predicate. No predicate, or one with an empty
/// field, passes the input through unchanged without allocating.
pub fn apply_filter<'a>(rows: &'a [Row], predicate: Option<&FilterPredicate>) -> Cow<'a, [Row]> {
    let Some(predicate) = predicate else {
        return Cow::Borrowed(rows);
    };
    if predicate.field.is_empty() {
        return Cow::Borrowed(rows);
    }

    let matched = rows
        .iter()
        .filter(|row| row_matches(row, predicate))
        .cloned()
        .collect();
    Cow::Owned(matched)
}

fn row_matches(row: &Row, predicate: &FilterPredicate) -> bool {
    let cell = row.cell(&predicate.field);

    if predicate.operator.is_numeric() {
        let (Some(cell), Some(value)) = (numeric_value(&cell), parse_number(&predicate.value))
        else {
            return false;
        };
        match predicate.operator {
            FilterOperator::Eq => cell == value,
            FilterOperator::Ne => cell != value,
            FilterOperator::Gt => cell > value,
            FilterOperator::Ge => cell >= value,
            FilterOperator::Lt => cell < value,
            FilterOperator::Le => cell <= value,
            _ => unreachable!(),
        }
    } else {
        let cell = text_value(&cell).to_lowercase();
        let value = predicate.value.to_lowercase();
        match predicate.operator {
            FilterOperator::Contains => cell.contains(&value),
            FilterOperator::Equals => cell == value,
            FilterOperator::StartsWith => cell.starts_with(&value),
            FilterOperator::EndsWith => cell.ends_with(&value),
            _ => unreachable!(),
        }
    }
}

fn numeric_value(cell: &Value) -> Option<f64> {
    match cell {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_number(text),
        _ => None,
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Missing cells compare as the empty string.
fn text_value(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::column;
    use crate::row::{normalize_row, OrderRecord};
    use serde_json::json;

    fn rows(value: serde_json::Value) -> Vec<Row> {
        serde_json::from_value::<Vec<OrderRecord>>(value)
            .expect("rows should deserialize")
            .into_iter()
            .map(normalize_row)
            .collect()
    }

    fn predicate(field: &str, operator: FilterOperator, value: &str) -> FilterPredicate {
        FilterPredicate {
            field: field.to_string(),
            operator,
            value: value.to_string(),
        }
    }

    #[test]
    fn no_predicate_is_identity_without_allocation() {
        let data = rows(json!([{ "orderId": "1" }, { "orderId": "2" }]));
        let filtered = apply_filter(&data, None);
        assert!(matches!(filtered, Cow::Borrowed(_)));
        assert_eq!(filtered.as_ref(), data.as_slice());
    }

    #[test]
    fn empty_field_is_identity() {
        let data = rows(json!([{ "orderId": "1" }]));
        let p = predicate("", FilterOperator::Contains, "x");
        assert!(matches!(apply_filter(&data, Some(&p)), Cow::Borrowed(_)));
    }

    #[test]
    fn text_operators_are_case_insensitive() {
        let data = rows(json!([
            { "orderId": "1", "sale_status": "Delivered" },
            { "orderId": "2", "sale_status": "pending" },
        ]));

        let contains = apply_filter(&data, Some(&predicate("sale_status", FilterOperator::Contains, "LIVER")));
        assert_eq!(contains.len(), 1);
        assert_eq!(contains[0].id, "1");

        let equals = apply_filter(&data, Some(&predicate("sale_status", FilterOperator::Equals, "PENDING")));
        assert_eq!(equals.len(), 1);
        assert_eq!(equals[0].id, "2");

        let starts = apply_filter(&data, Some(&predicate("sale_status", FilterOperator::StartsWith, "de")));
        assert_eq!(starts.len(), 1);

        let ends = apply_filter(&data, Some(&predicate("sale_status", FilterOperator::EndsWith, "ING")));
        assert_eq!(ends.len(), 1);
    }

    #[test]
    fn missing_cells_compare_as_empty_string() {
        let data = rows(json!([{ "orderId": "1" }, { "orderId": "2", "carrier": "DHL" }]));
        let p = predicate("carrier", FilterOperator::Equals, "");
        let filtered = apply_filter(&data, Some(&p));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn numeric_operators_compare_coerced_values() {
        let data = rows(json!([
            { "orderId": "1", "units": 2 },
            { "orderId": "2", "units": "5" },
            { "orderId": "3", "units": 9 },
        ]));

        let gt = apply_filter(&data, Some(&predicate("units", FilterOperator::Gt, "4")));
        let ids: Vec<&str> = gt.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);

        let le = apply_filter(&data, Some(&predicate("units", FilterOperator::Le, "2")));
        assert_eq!(le.len(), 1);
        assert_eq!(le[0].id, "1");

        let ne = apply_filter(&data, Some(&predicate("units", FilterOperator::Ne, "5")));
        let ids: Vec<&str> = ne.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn unparseable_cell_is_excluded_for_every_numeric_operator() {
        let data = rows(json!([{ "orderId": "1", "units": "n/a" }, { "orderId": "2" }]));
        for op in NUMBER_OPERATORS {
            let filtered = apply_filter(&data, Some(&predicate("units", *op, "3")));
            assert!(filtered.is_empty(), "operator {} should exclude", op.label());
        }
    }

    #[test]
    fn unparseable_predicate_value_excludes_all_rows() {
        let data = rows(json!([{ "orderId": "1", "units": 2 }]));
        let p = predicate("units", FilterOperator::Eq, "two");
        assert!(apply_filter(&data, Some(&p)).is_empty());
    }

    #[test]
    fn picker_equals_scenario() {
        let data = rows(json!([
            { "orderId": "1", "picker": null },
            { "orderId": "2", "picker": "A" },
        ]));
        let p = predicate("picker", FilterOperator::Equals, "A");
        let filtered = apply_filter(&data, Some(&p));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn field_switch_resets_operator_to_first_of_kind() {
        let text_kind = column("sale_number").unwrap().kind;
        let number_kind = column("units").unwrap().kind;
        assert_eq!(default_operator(text_kind), FilterOperator::Contains);
        assert_eq!(default_operator(number_kind), FilterOperator::Eq);
        assert_eq!(available_operators(text_kind)[0], default_operator(text_kind));
        assert_eq!(
            available_operators(number_kind)[0],
            default_operator(number_kind)
        );
    }

    #[test]
    fn operator_labels_round_trip() {
        for op in TEXT_OPERATORS.iter().chain(NUMBER_OPERATORS) {
            assert_eq!(FilterOperator::from_label(op.label()), Some(*op));
        }
        assert_eq!(FilterOperator::from_label("between"), None);
    }
}

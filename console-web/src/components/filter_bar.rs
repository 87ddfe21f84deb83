//! Single-predicate filter controls shared by both view layouts.

use dioxus::prelude::*;

use console_domain::{
    available_operators, column, default_operator, ColumnKind, FilterOperator, FilterPredicate,
    COLUMNS,
};

fn kind_of(field: &str) -> ColumnKind {
    column(field).map(|col| col.kind).unwrap_or(ColumnKind::Text)
}

#[component]
pub fn FilterBar(predicate: Signal<Option<FilterPredicate>>) -> Element {
    let mut predicate = predicate;
    let mut field = use_signal(|| COLUMNS[0].field.to_string());
    let mut operator = use_signal(|| default_operator(COLUMNS[0].kind));
    let mut value = use_signal(String::new);

    let operators = available_operators(kind_of(&field.read()));
    let operator_label = operator.read().label();

    let mut apply = move || {
        if value.read().is_empty() {
            return;
        }
        predicate.set(Some(FilterPredicate {
            field: field(),
            operator: operator(),
            value: value(),
        }));
    };

    rsx! {
        div { class: "filter-bar",
            select {
                class: "filter-select",
                value: "{field}",
                onchange: move |evt| {
                    let next = evt.value();
                    // A new field resets the operator to the first choice
                    // for that field's kind.
                    operator.set(default_operator(kind_of(&next)));
                    field.set(next);
                },
                for col in COLUMNS.iter() {
                    option { value: "{col.field}", "{col.header}" }
                }
            }

            select {
                class: "filter-select",
                value: "{operator_label}",
                onchange: move |evt| {
                    if let Some(parsed) = FilterOperator::from_label(&evt.value()) {
                        operator.set(parsed);
                    }
                },
                for label in operators.iter().map(|op| op.label()) {
                    option { value: "{label}", "{label}" }
                }
            }

            input {
                class: "filter-value",
                placeholder: "Value",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        apply();
                    }
                },
            }

            button {
                class: "filter-apply",
                disabled: value.read().is_empty(),
                onclick: move |_| apply(),
                "Apply Filter"
            }

            button {
                class: "filter-clear",
                onclick: move |_| {
                    value.set(String::new());
                    field.set(COLUMNS[0].field.to_string());
                    operator.set(default_operator(COLUMNS[0].kind));
                    predicate.set(None);
                },
                "Clear Filter"
            }
        }
    }
}

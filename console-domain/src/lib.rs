//! Domain model for the fulfillment back-office console.
//!
//! Everything in this crate is pure and runs natively as well as in WASM:
//! the row model, the static column registry, the client-side filter engine,
//! the responsive view selector, and the assignment rules with their
//! optimistic reconciliation helpers. All I/O lives in `console-web`.

pub mod assign;
pub mod columns;
pub mod filter;
pub mod packer;
pub mod poll;
pub mod row;
pub mod view;

pub use assign::{
    apply_packer_assignment, apply_picker_assignment, can_bulk_assign_packer,
    cannot_bulk_assign_picker, eligible_for_packer, eligible_for_picker, selectable, stage,
    AssignmentStage,
};
pub use columns::{
    column, group_of, visible_columns, CellRenderer, ColumnDescriptor, ColumnGroup, ColumnKind,
    COLUMNS, COLUMN_GROUPS,
};
pub use filter::{
    apply_filter, available_operators, default_operator, FilterOperator, FilterPredicate,
};
pub use packer::{active_packers, packer_by_id, PackerRecord};
pub use poll::FetchGate;
pub use row::{normalize_row, LabelField, OrderRecord, Row};
pub use view::{choose_view, ViewMode, COMPACT_MAX_WIDTH};

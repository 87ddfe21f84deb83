//! Console shell: polling controller, assignment workflow orchestration,
//! and responsive view selection.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use console_domain::{
    active_packers, apply_filter, apply_packer_assignment, apply_picker_assignment,
    can_bulk_assign_packer, cannot_bulk_assign_picker, choose_view, normalize_row, packer_by_id,
    FetchGate, FilterPredicate, PackerRecord, Row, ViewMode,
};

use crate::api::{self, ApiError};
use crate::components::detail::DetailPanel;
use crate::components::filter_bar::FilterBar;
use crate::components::grid_cards::CardStream;
use crate::components::grid_table::GridTable;
use crate::components::packer_dialog::{PackerDialog, PackerDialogTarget};
use crate::components::styles::CONSOLE_STYLES;
use crate::interop;
use crate::notify::{push_notice, Notice, Severity};
use crate::session::{SessionExpired, SessionStore};

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 300_000;
const POLL_TICK_MS: u32 = 1_000;

const PICKER_DENIED_FALLBACK: &str = "Signed-in profile cannot take picker assignments";
const PACKER_DENIED_FALLBACK: &str = "Signed-in profile cannot assign packers";

#[component]
pub fn Console(#[props(default = DEFAULT_POLL_INTERVAL_MS)] poll_interval_ms: u32) -> Element {
    let session = use_context::<SessionStore>();
    let expired = use_context::<SessionExpired>();

    let rows = use_signal(Vec::<Row>::new);
    let loading = use_signal(|| true);
    let notice = use_signal(|| None::<Notice>);
    let mut packers = use_signal(Vec::<PackerRecord>::new);
    let selected = use_signal(Vec::<String>::new);
    let assigning = use_signal(|| false);
    let row_busy = use_signal(|| None::<String>);
    let mut dialog_target = use_signal(|| None::<PackerDialogTarget>);
    let mut chosen_packer = use_signal(String::new);
    let predicate = use_signal(|| None::<FilterPredicate>);
    let visibility_overrides = use_signal(HashMap::<String, bool>::new);
    let viewport = use_signal(interop::viewport_size);
    let mut detail = use_signal(|| None::<api::OrderDetail>);
    let mut packers_fetched = use_signal(|| false);
    let mut poll_started = use_signal(|| false);
    let mut triggers = use_signal(|| None::<interop::RefreshTriggers>);

    let fetch_gate = use_hook(FetchGate::new);
    let alive = use_hook(|| Rc::new(Cell::new(true)));
    let refresh_requested = use_hook(|| Rc::new(Cell::new(false)));

    {
        let alive = alive.clone();
        use_drop(move || {
            alive.set(false);
            triggers.set(None);
        });
    }

    use_effect(move || {
        spawn(async move {
            interop::track_viewport(viewport).await;
        });
    });

    {
        let refresh_requested = refresh_requested.clone();
        use_effect(move || {
            if triggers.read().is_some() {
                return;
            }
            match interop::watch_refresh_triggers(refresh_requested.clone()) {
                Some(registered) => triggers.set(Some(registered)),
                None => dioxus_logger::tracing::warn!("Failed to register refresh listeners"),
            }
        });
    }

    // Packer directory: cache first, then a fresh fetch replaces it.
    {
        let alive = alive.clone();
        use_effect(move || {
            if packers_fetched() {
                return;
            }
            packers_fetched.set(true);

            let cached = session.cached_packers();
            if !cached.is_empty() {
                packers.set(cached);
            }

            let alive = alive.clone();
            spawn(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::fetch_packers(&token).await {
                    Ok(records) => {
                        let active = active_packers(records);
                        session.cache_packers(&active);
                        if alive.get() {
                            packers.set(active);
                        }
                    }
                    Err(err) => {
                        dioxus_logger::tracing::warn!(
                            "Failed to refresh packer directory, keeping cache: {err}"
                        );
                        if alive.get() {
                            push_notice(
                                notice,
                                Severity::Error,
                                "Could not load the packer directory",
                            );
                        }
                    }
                }
            });
        });
    }

    // Poll pump: one immediate fetch, then interval ticks. Manual,
    // visibility, and focus triggers land on the shared flag and drain
    // here, all behind the same in-flight gate.
    {
        let fetch_gate = fetch_gate.clone();
        let alive = alive.clone();
        let refresh_requested = refresh_requested.clone();
        use_effect(move || {
            if poll_started() {
                return;
            }
            poll_started.set(true);

            let fetch_gate = fetch_gate.clone();
            let alive = alive.clone();
            let refresh_requested = refresh_requested.clone();
            spawn(async move {
                refresh_orders(session, expired, rows, loading, notice, &fetch_gate, &alive).await;

                let mut elapsed: u32 = 0;
                while alive.get() {
                    TimeoutFuture::new(POLL_TICK_MS).await;
                    if !alive.get() {
                        break;
                    }
                    elapsed += POLL_TICK_MS;

                    if refresh_requested.take() {
                        refresh_orders(session, expired, rows, loading, notice, &fetch_gate, &alive)
                            .await;
                        continue;
                    }

                    if elapsed >= poll_interval_ms {
                        elapsed = 0;
                        // Interval ticks are skipped while the tab is hidden;
                        // the visibility trigger catches up on return.
                        if !interop::document_hidden() {
                            refresh_orders(
                                session,
                                expired,
                                rows,
                                loading,
                                notice,
                                &fetch_gate,
                                &alive,
                            )
                            .await;
                        }
                    }
                }
            });
        });
    }

    let request_refresh = {
        let fetch_gate = fetch_gate.clone();
        let alive = alive.clone();
        use_callback(move |_: ()| {
            let fetch_gate = fetch_gate.clone();
            let alive = alive.clone();
            spawn(async move {
                refresh_orders(session, expired, rows, loading, notice, &fetch_gate, &alive).await;
            });
        })
    };

    let assign_picker_bulk = {
        let refresh_requested = refresh_requested.clone();
        use_callback(move |_: ()| {
            let ids = selected();
            if ids.is_empty() || assigning() {
                return;
            }
            let refresh_requested = refresh_requested.clone();
            spawn(async move {
                run_picker_assignment(
                    session,
                    ids,
                    true,
                    rows,
                    selected,
                    assigning,
                    row_busy,
                    notice,
                    refresh_requested,
                )
                .await;
            });
        })
    };

    let assign_picker_row = {
        let refresh_requested = refresh_requested.clone();
        use_callback(move |order_id: String| {
            if row_busy.read().is_some() {
                return;
            }
            let refresh_requested = refresh_requested.clone();
            spawn(async move {
                run_picker_assignment(
                    session,
                    vec![order_id],
                    false,
                    rows,
                    selected,
                    assigning,
                    row_busy,
                    notice,
                    refresh_requested,
                )
                .await;
            });
        })
    };

    let open_packer_dialog_bulk = use_callback(move |_: ()| {
        let ids = selected();
        if !can_bulk_assign_packer(&rows.read(), &ids) {
            return;
        }
        chosen_packer.set(String::new());
        dialog_target.set(Some(PackerDialogTarget { order_ids: ids }));
    });

    let open_packer_dialog_row = use_callback(move |order_id: String| {
        chosen_packer.set(String::new());
        dialog_target.set(Some(PackerDialogTarget {
            order_ids: vec![order_id],
        }));
    });

    let close_packer_dialog = use_callback(move |_: ()| {
        dialog_target.set(None);
        chosen_packer.set(String::new());
    });

    let confirm_packer = {
        let refresh_requested = refresh_requested.clone();
        use_callback(move |_: ()| {
            let Some(target) = dialog_target() else {
                return;
            };
            let refresh_requested = refresh_requested.clone();
            spawn(async move {
                run_packer_assignment(
                    session,
                    target.order_ids,
                    chosen_packer(),
                    packers(),
                    rows,
                    selected,
                    assigning,
                    dialog_target,
                    chosen_packer,
                    notice,
                    refresh_requested,
                )
                .await;
            });
        })
    };

    let download_label = use_callback(move |order_id: String| {
        let row = rows.read().iter().find(|r| r.id == order_id).cloned();
        let Some(row) = row else {
            return;
        };
        spawn(async move {
            run_label_download(session, row, notice).await;
        });
    });

    let open_detail = {
        let alive = alive.clone();
        use_callback(move |order_id: String| {
            let alive = alive.clone();
            spawn(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::fetch_order_detail(&token, &order_id).await {
                    Ok(found) => {
                        if alive.get() {
                            detail.set(Some(found));
                        }
                    }
                    Err(ApiError::Unauthorized { .. }) => {
                        let mut flag = expired.0;
                        flag.set(true);
                    }
                    Err(err) => {
                        dioxus_logger::tracing::warn!("Failed to load order detail: {err}");
                        if alive.get() {
                            push_notice(notice, Severity::Error, "Could not load the order detail");
                        }
                    }
                }
            });
        })
    };

    let close_detail = use_callback(move |_: ()| detail.set(None));

    let filtered: Vec<Row> = apply_filter(&rows.read(), predicate.read().as_ref()).into_owned();
    let mode = choose_view(viewport.read().0);

    let selection = selected.read();
    let bulk_picker_enabled = !assigning()
        && !selection.is_empty()
        && !cannot_bulk_assign_picker(&rows.read(), &selection);
    let bulk_packer_enabled = !assigning() && can_bulk_assign_packer(&rows.read(), &selection);
    drop(selection);

    rsx! {
        style { {CONSOLE_STYLES} }
        div { class: "console-shell",
            header { class: "console-header",
                h2 { "Order Fulfillment" }
                if loading() {
                    span { class: "console-loading", "Loading…" }
                }
                button {
                    class: "console-refresh",
                    onclick: move |_| request_refresh.call(()),
                    "Refresh"
                }
            }

            FilterBar { predicate }

            if matches!(mode, ViewMode::Tabular) {
                GridTable {
                    rows: filtered.clone(),
                    overrides: visibility_overrides,
                    selected,
                    assigning: assigning(),
                    row_busy: row_busy.read().clone(),
                    bulk_picker_enabled,
                    bulk_packer_enabled,
                    on_assign_picker_bulk: assign_picker_bulk,
                    on_open_packer_dialog: open_packer_dialog_bulk,
                    on_assign_picker_row: assign_picker_row,
                    on_assign_packer_row: open_packer_dialog_row,
                    on_download_label: download_label,
                    on_open_detail: open_detail,
                }
            } else {
                CardStream {
                    rows: filtered.clone(),
                    overrides: visibility_overrides,
                    loading: loading(),
                    row_busy: row_busy.read().clone(),
                    on_assign_picker_row: assign_picker_row,
                    on_assign_packer_row: open_packer_dialog_row,
                    on_download_label: download_label,
                    on_open_detail: open_detail,
                }
            }

            if let Some(current) = notice.read().clone() {
                NoticeView { notice: current }
            }

            if let Some(target) = dialog_target.read().clone() {
                PackerDialog {
                    target,
                    packers: packers(),
                    chosen: chosen_packer,
                    assigning: assigning(),
                    on_close: close_packer_dialog,
                    on_confirm: confirm_packer,
                }
            }

            if let Some(found) = detail.read().clone() {
                DetailPanel {
                    detail: found,
                    on_close: close_detail,
                    on_download_label: download_label,
                }
            }
        }
    }
}

#[component]
fn NoticeView(notice: Notice) -> Element {
    let class = format!("notice {}", notice.severity.css_class());
    rsx! {
        div { class: "{class}", "{notice.message}" }
    }
}

/// One guarded fetch of the full row set. A trigger that arrives while a
/// fetch is pending bounces off the gate.
async fn refresh_orders(
    session: SessionStore,
    expired: SessionExpired,
    mut rows: Signal<Vec<Row>>,
    mut loading: Signal<bool>,
    notice: Signal<Option<Notice>>,
    gate: &FetchGate,
    alive: &Rc<Cell<bool>>,
) {
    if !gate.try_acquire() {
        return;
    }
    let Some(token) = session.token() else {
        gate.release();
        return;
    };
    loading.set(true);

    let result = api::fetch_orders(&token).await;
    if !alive.get() {
        gate.release();
        return;
    }

    match result {
        Ok(records) => {
            // Full replace, not an incremental merge.
            rows.set(records.into_iter().map(normalize_row).collect());
        }
        Err(ApiError::Unauthorized { .. }) => {
            let mut flag = expired.0;
            flag.set(true);
        }
        Err(err) => {
            dioxus_logger::tracing::warn!("Failed to load orders: {err}");
            push_notice(
                notice,
                Severity::Error,
                "Could not refresh orders, try again later",
            );
        }
    }

    loading.set(false);
    gate.release();
}

#[allow(clippy::too_many_arguments)]
async fn run_picker_assignment(
    session: SessionStore,
    ids: Vec<String>,
    bulk: bool,
    mut rows: Signal<Vec<Row>>,
    mut selected: Signal<Vec<String>>,
    mut assigning: Signal<bool>,
    mut row_busy: Signal<Option<String>>,
    notice: Signal<Option<Notice>>,
    refresh_requested: Rc<Cell<bool>>,
) {
    let Some(token) = session.token() else {
        return;
    };
    if bulk {
        assigning.set(true);
    } else {
        row_busy.set(ids.first().cloned());
    }

    match api::assign_picker(&token, &ids).await {
        Ok(()) => {
            match session.user_display_name() {
                Some(name) => apply_picker_assignment(&mut rows.write(), &ids, &name),
                // Without a display name to patch in, fall back to an
                // authoritative reload.
                None => refresh_requested.set(true),
            }
            push_notice(notice, Severity::Success, "Picker assigned");
            selected.set(Vec::new());
        }
        Err(ApiError::Unauthorized { reason }) => {
            push_notice(
                notice,
                Severity::Error,
                reason.unwrap_or_else(|| PICKER_DENIED_FALLBACK.to_string()),
            );
        }
        Err(err) => {
            dioxus_logger::tracing::warn!("Picker assignment failed: {err}");
            push_notice(
                notice,
                Severity::Error,
                "Could not process the request, try again",
            );
        }
    }

    if bulk {
        assigning.set(false);
    } else {
        row_busy.set(None);
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_packer_assignment(
    session: SessionStore,
    target_ids: Vec<String>,
    chosen_id: String,
    packers: Vec<PackerRecord>,
    mut rows: Signal<Vec<Row>>,
    mut selected: Signal<Vec<String>>,
    mut assigning: Signal<bool>,
    mut dialog_target: Signal<Option<PackerDialogTarget>>,
    mut chosen_packer: Signal<String>,
    notice: Signal<Option<Notice>>,
    refresh_requested: Rc<Cell<bool>>,
) {
    // No choice yet: warn inline, send nothing, keep the dialog open.
    let Ok(packer_id) = chosen_id.trim().parse::<i64>() else {
        push_notice(notice, Severity::Warning, "Choose a packer first");
        return;
    };
    let Some(token) = session.token() else {
        return;
    };
    assigning.set(true);

    match api::assign_packer(&token, packer_id, &target_ids).await {
        Ok(()) => {
            match packer_by_id(&packers, packer_id) {
                Some(packer) => {
                    apply_packer_assignment(&mut rows.write(), &target_ids, &packer.name)
                }
                None => refresh_requested.set(true),
            }
            push_notice(notice, Severity::Success, "Packer assigned");
            selected.set(Vec::new());
            dialog_target.set(None);
            chosen_packer.set(String::new());
        }
        Err(ApiError::Unauthorized { reason }) => {
            push_notice(
                notice,
                Severity::Error,
                reason.unwrap_or_else(|| PACKER_DENIED_FALLBACK.to_string()),
            );
        }
        Err(err) => {
            dioxus_logger::tracing::warn!("Packer assignment failed: {err}");
            push_notice(
                notice,
                Severity::Error,
                "Could not process the request, try again",
            );
        }
    }

    assigning.set(false);
}

/// Inline label content downloads directly; a bare presence flag fetches
/// the document first.
async fn run_label_download(session: SessionStore, row: Row, notice: Signal<Option<Notice>>) {
    let sale_number = row.cell_text("sale_number");
    let file_name = interop::label_file_name(sale_number.as_deref());

    if let Some(bytes) = row.label.as_ref().and_then(interop::decode_label_content) {
        finish_label_download(&bytes, &file_name, notice);
        return;
    }

    let Some(number) = sale_number else {
        push_notice(notice, Severity::Warning, "This row has no sale number");
        return;
    };
    let Some(token) = session.token() else {
        return;
    };

    match api::fetch_label_document(&token, &number).await {
        Ok(bytes) => finish_label_download(&bytes, &file_name, notice),
        Err(ApiError::Unauthorized { reason }) => {
            push_notice(
                notice,
                Severity::Error,
                reason.unwrap_or_else(|| "Signed-in profile cannot fetch labels".to_string()),
            );
        }
        Err(err) => {
            dioxus_logger::tracing::warn!("Label fetch failed: {err}");
            push_notice(notice, Severity::Error, "Could not download the label");
        }
    }
}

fn finish_label_download(bytes: &[u8], file_name: &str, notice: Signal<Option<Notice>>) {
    if let Err(err) = interop::download_pdf(bytes, file_name) {
        dioxus_logger::tracing::warn!("Label download failed: {err}");
        push_notice(notice, Severity::Error, "Could not download the label");
    }
}

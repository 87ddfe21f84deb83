//! Transient severity-tagged notices with timed auto-dismiss.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

pub const NOTICE_DISMISS_MS: u32 = 4_000;

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "notice-success",
            Severity::Warning => "notice-warning",
            Severity::Error => "notice-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Replace the current notice and schedule its dismissal. A notice that
/// has already been superseded is left alone when its timer fires.
pub fn push_notice(mut slot: Signal<Option<Notice>>, severity: Severity, message: impl Into<String>) {
    let id = NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed);
    slot.set(Some(Notice {
        id,
        message: message.into(),
        severity,
    }));

    spawn(async move {
        TimeoutFuture::new(NOTICE_DISMISS_MS).await;
        let still_current = slot.peek().as_ref().is_some_and(|current| current.id == id);
        if still_current {
            slot.set(None);
        }
    });
}

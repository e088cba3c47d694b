use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Increments per notice so a stale timeout never hides a newer one
    pub seq: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// App-wide UI state: sidebar visibility and the transient notice bar
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
    seq: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            notice: RwSignal::new(None),
            seq: StoredValue::new(0),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Show a notice that hides itself after a few seconds
    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let message = message.into();
        log::info!("notice ({:?}): {}", kind, message);
        self.seq.update_value(|s| *s += 1);
        let seq = self.seq.get_value();
        self.notice.set(Some(Notice { seq, kind, message }));

        let notice = self.notice;
        Timeout::new(NOTICE_TIMEOUT_MS, move || {
            let current = notice.try_with_untracked(|n| n.as_ref().map(|n| n.seq));
            if current.flatten() == Some(seq) {
                notice.try_set(None);
            }
        })
        .forget();
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    expect_context::<AppGlobalContext>()
}

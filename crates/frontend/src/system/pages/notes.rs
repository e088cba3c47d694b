//! Scratchpad notes kept in the browser

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::async_callback::AsyncCallback;
use crate::shared::layouts::DocumentLayout;
use crate::shared::storage::{load_json, save_json};

const STORAGE_KEY: &str = "workspace-notes";
const AUTOSAVE_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for Note {
    fn default() -> Self {
        Self {
            title: "Untitled note".to_string(),
            body: String::new(),
            saved_at: None,
        }
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let stored: Note = load_json(STORAGE_KEY).unwrap_or_default();
    let title = RwSignal::new(stored.title);
    let body = RwSignal::new(stored.body);
    let saved_at = RwSignal::new(stored.saved_at);
    let dirty = RwSignal::new(false);
    let autosave = StoredValue::new_local(None::<Timeout>);

    let persist = move || {
        let now = Utc::now();
        save_json(
            STORAGE_KEY,
            &Note {
                title: title.get_untracked(),
                body: body.get_untracked(),
                saved_at: Some(now),
            },
        );
        saved_at.try_set(Some(now));
        dirty.try_set(false);
    };

    // Restarting the timer on every edit saves once typing pauses
    let touch = move || {
        dirty.set(true);
        autosave.set_value(Some(Timeout::new(AUTOSAVE_MS, persist)));
    };
    on_cleanup(move || {
        autosave.try_update_value(|t| *t = None);
    });

    let on_save = AsyncCallback::new(move |_| async move {
        autosave.set_value(None);
        persist();
        Ok(())
    });

    view! {
        <DocumentLayout
            title=title
            on_title_change=Callback::new(move |text| {
                title.set(text);
                touch();
            })
            content=body
            is_dirty=dirty
            last_saved=saved_at
            on_save=on_save
        >
            <textarea
                class="document-layout__textarea"
                placeholder="Start with a # heading…"
                prop:value=move || body.get()
                on:input=move |ev| {
                    body.set(event_target_value(&ev));
                    touch();
                }
            ></textarea>
        </DocumentLayout>
    }
}


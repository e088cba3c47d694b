//! Keyboard shortcuts scoped to a mounted component
//!
//! Each layout that reacts to keys registers one window `keydown` listener
//! under its instance id. The handle is released on cleanup, and acquiring
//! again with the same id removes the previous listener first.

use std::cell::RefCell;

use contracts::shared::layout::keyboard::{instance_id, KeyChord, ListenerRegistry};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

thread_local! {
    static LISTENERS: RefCell<ListenerRegistry<WindowListenerHandle>> =
        RefCell::new(ListenerRegistry::new());
}

pub fn chord_from_event(ev: &KeyboardEvent) -> KeyChord {
    KeyChord {
        key: ev.key(),
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        shift: ev.shift_key(),
        alt: ev.alt_key(),
    }
}

/// The event originates from a text input, where bare keys must keep
/// their normal meaning
pub fn is_typing(ev: &KeyboardEvent) -> bool {
    ev.target()
        .map(|t| {
            t.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || t.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        })
        .unwrap_or(false)
}

/// Multi-line editors keep Enter for new lines
pub fn is_multiline(ev: &KeyboardEvent) -> bool {
    ev.target()
        .map(|t| t.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some())
        .unwrap_or(false)
}

/// Register a keydown handler for the lifetime of the calling component.
/// Returns the instance id the listener is registered under.
pub fn use_scoped_keydown<F>(prefix: &str, handler: F) -> String
where
    F: Fn(&KeyChord, &KeyboardEvent) + 'static,
{
    let id = instance_id(prefix);
    acquire(&id, handler);

    let cleanup_id = id.clone();
    on_cleanup(move || release(&cleanup_id));
    id
}

fn acquire<F>(id: &str, handler: F)
where
    F: Fn(&KeyChord, &KeyboardEvent) + 'static,
{
    let handle = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        handler(&chord_from_event(&ev), &ev);
    });
    let previous = LISTENERS.with(|registry| registry.borrow_mut().acquire(id, handle));
    if let Some(previous) = previous {
        previous.remove();
    }
    log::debug!("keyboard: listener acquired for {}", id);
}

fn release(id: &str) {
    let handle = LISTENERS.with(|registry| registry.borrow_mut().release(id));
    if let Some(handle) = handle {
        handle.remove();
        log::debug!("keyboard: listener released for {}", id);
    }
}

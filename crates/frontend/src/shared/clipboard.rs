//! Clipboard access through the async Web Clipboard API

use wasm_bindgen_futures::spawn_local;

/// Copy `text` and report the outcome once the browser settles the promise
pub fn copy_to_clipboard<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            on_done(Err("No window object".to_string()));
            return;
        };
        let clipboard = window.navigator().clipboard();
        let result = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
            .await
            .map(|_| ())
            .map_err(|e| format!("Clipboard write failed: {:?}", e));
        on_done(result);
    });
}

/// Absolute URL of an in-app path, for sharing
pub fn absolute_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, path)
}

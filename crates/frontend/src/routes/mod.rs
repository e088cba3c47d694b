pub mod routes;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Client-side navigation as a copyable callback
pub fn use_go() -> Callback<String> {
    let navigate = StoredValue::new_local(use_navigate());
    Callback::new(move |path: String| {
        navigate.with_value(|navigate| navigate(&path, Default::default()));
    })
}

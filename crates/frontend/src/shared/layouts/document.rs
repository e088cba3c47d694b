//! Long-form editing chrome: title, save status, outline and word count.
//! The editor itself is the children.

use chrono::{DateTime, Utc};
use contracts::shared::layout::document::{outline_from_text, word_count, SaveStatus};
use leptos::prelude::*;

use crate::shared::async_callback::AsyncCallback;
use crate::shared::components::ui::Button;
use crate::shared::components::Skeleton;
use crate::shared::keyboard::use_scoped_keydown;

#[derive(Debug, Clone, Copy)]
pub struct DocumentLayoutConfig {
    pub show_outline: bool,
    pub show_word_count: bool,
}

impl Default for DocumentLayoutConfig {
    fn default() -> Self {
        Self {
            show_outline: true,
            show_word_count: true,
        }
    }
}

#[component]
pub fn DocumentLayout(
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional)]
    on_title_change: Option<Callback<String>>,
    /// Text the outline and word count are computed from
    #[prop(into)]
    content: Signal<String>,
    #[prop(optional, into)]
    is_dirty: MaybeProp<bool>,
    #[prop(optional, into)]
    last_saved: MaybeProp<DateTime<Utc>>,
    /// Ctrl/Cmd+S and the save button
    #[prop(optional)]
    on_save: Option<AsyncCallback>,
    #[prop(optional)]
    config: Option<DocumentLayoutConfig>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let saving = RwSignal::new(false);

    let save = move || {
        if let Some(cb) = on_save {
            cb.run_busy((), saving, |_| {});
        }
    };

    use_scoped_keydown("document", move |chord, ev| {
        if chord.primary() && chord.key_lower() == "s" {
            ev.prevent_default();
            save();
        }
    });

    let status = move || {
        SaveStatus::resolve(saving.get(), is_dirty.get().unwrap_or(false), last_saved.get())
    };
    let outline = Memo::new(move |_| content.with(|c| outline_from_text(c)));
    let words = move || content.with(|c| word_count(c));

    view! {
        <Show when=move || !loading.get().unwrap_or(false) fallback=|| view! { <Skeleton header=false /> }>
            <div class="document-layout">
                <div class="document-layout__header">
                    <input
                        class="document-layout__title"
                        prop:value=move || title.get()
                        readonly=on_title_change.is_none()
                        on:input=move |ev| {
                            if let Some(cb) = on_title_change {
                                cb.run(event_target_value(&ev));
                            }
                        }
                    />
                    <span
                        class="document-layout__status"
                        class:document-layout__status--unsaved=move || status() == SaveStatus::Unsaved
                    >
                        {move || status().label()}
                    </span>
                    {on_save.map(|_| view! {
                        <Button
                            variant="secondary"
                            busy=saving
                            on_click=Callback::new(move |_| save())
                        >
                            "Save"
                        </Button>
                    })}
                </div>
                <div class="document-layout__main">
                    {config.show_outline.then(|| view! {
                        <nav class="document-layout__outline">
                            <h3 class="document-layout__outline-title">"Outline"</h3>
                            {move || {
                                let items = outline.get();
                                if items.is_empty() {
                                    return view! {
                                        <p class="document-layout__outline-empty">"Add # headings to build an outline"</p>
                                    }
                                    .into_any();
                                }
                                view! {
                                    <ul>
                                        {items
                                            .into_iter()
                                            .map(|item| view! {
                                                <li
                                                    class="document-layout__outline-item"
                                                    data-id=item.id
                                                    style=format!("padding-left: {}px", (item.level.saturating_sub(1)) as u32 * 12)
                                                >
                                                    {item.title}
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                .into_any()
                            }}
                        </nav>
                    })}
                    <div class="document-layout__editor">{children()}</div>
                </div>
                {config.show_word_count.then(|| view! {
                    <div class="document-layout__footer">
                        {move || match words() {
                            1 => "1 word".to_string(),
                            n => format!("{} words", n),
                        }}
                    </div>
                })}
            </div>
        </Show>
    }
}

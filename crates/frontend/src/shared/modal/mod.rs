use crate::shared::icons::icon;
use crate::shared::keyboard::use_scoped_keydown;
use leptos::ev;
use leptos::prelude::*;

/// Centered dialog over a dimmed overlay. Escape and overlay clicks close it.
#[component]
pub fn Modal(
    #[prop(into)]
    title: Signal<String>,
    on_close: Callback<()>,
    /// Optional action buttons (Save, Cancel, etc.) to display in header
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    use_scoped_keydown("modal", move |chord, _| {
        if chord.key == "Escape" {
            on_close.run(());
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <div class="modal-header-actions">
                        {move || action_buttons.as_ref().map(|buttons| buttons())}
                        <button class="button button--icon modal__close" title="Close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

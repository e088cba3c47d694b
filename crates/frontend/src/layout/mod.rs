pub mod global_context;
pub mod left;
pub mod modal_host;
pub mod modal_service;
pub mod top_header;

use global_context::use_app_context;
use leptos::prelude::*;
use left::Sidebar;
use modal_host::ModalHost;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |    Notice bar + content      |
/// +------------------------------------------+
/// ```
///
/// The routed page is the children; the modal host sits above everything.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </div>

                <main class="app-main">
                    {move || ctx.notice.get().map(|notice| view! {
                        <div class=notice.kind.class() role="status">
                            <span>{notice.message}</span>
                            <button class="notice__close" title="Dismiss" on:click=move |_| ctx.dismiss_notice()>
                                "×"
                            </button>
                        </div>
                    })}
                    {children()}
                </main>
            </div>

            <ModalHost />
        </div>
    }
}

use crate::layout::global_context::AppGlobalContext;
use crate::layout::modal_service::ModalService;
use crate::routes::routes::AppRoutes;
use crate::shared::schemas::SchemaContext;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Schema registry, built once and shared by every page and layout
    provide_context(SchemaContext::new(contracts::shared::schema::registry()));

    // Provide ModalService for action-driven modals
    provide_context(ModalService::new());

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}

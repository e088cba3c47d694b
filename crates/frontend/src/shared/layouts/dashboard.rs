//! Dashboard chrome: header actions, manual refresh and auto-refresh

use contracts::shared::layout::dashboard::auto_refresh_interval;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::shared::async_callback::AsyncCallback;
use crate::shared::components::ui::Button;
use crate::shared::components::{PageHeader, Skeleton};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardLayoutConfig {
    pub title: String,
    pub subtitle: Option<String>,
    /// Seconds between automatic refreshes; below 5 disables it
    pub auto_refresh_secs: Option<u32>,
}

#[component]
pub fn DashboardLayout(
    #[prop(into)]
    config: Signal<DashboardLayoutConfig>,
    #[prop(optional)]
    on_refresh: Option<AsyncCallback>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional)]
    actions: Option<ChildrenFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let refreshing = RwSignal::new(false);
    let timer = StoredValue::new_local(None::<Interval>);

    let refresh = move || {
        if let Some(cb) = on_refresh {
            cb.run_busy((), refreshing, |_| {});
        }
    };

    // Dropping an Interval cancels it, so replacing the stored one clears the old timer
    Effect::new(move |_| {
        let interval = config.with(|c| auto_refresh_interval(c.auto_refresh_secs));
        let next = match (interval, on_refresh) {
            (Some(every), Some(_)) => {
                log::info!("dashboard: auto-refresh every {}s", every.as_secs());
                Some(Interval::new(every.as_millis() as u32, refresh))
            }
            _ => None,
        };
        timer.set_value(next);
    });
    on_cleanup(move || {
        timer.try_update_value(|t| *t = None);
    });

    let header = move || {
        let actions = actions.clone();
        view! {
            <PageHeader
                title=Signal::derive(move || config.with(|c| c.title.clone()))
                subtitle=Signal::derive(move || config.with(|c| c.subtitle.clone().unwrap_or_default()))
            >
                {actions.map(|a| a())}
                {on_refresh.map(|_| view! {
                    <Button
                        variant="secondary"
                        title="Refresh"
                        icon_name="refresh"
                        busy=refreshing
                        on_click=Callback::new(move |_| refresh())
                    >
                        <span class="button__label">"Refresh"</span>
                    </Button>
                })}
            </PageHeader>
        }
    };

    view! {
        <Show when=move || !loading.get().unwrap_or(false) fallback=|| view! { <Skeleton rows=4 /> }>
            <div class="dashboard-layout">
                {header()}
                <div class="dashboard-layout__widgets">{children()}</div>
            </div>
        </Show>
    }
}

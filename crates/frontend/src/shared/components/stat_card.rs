use crate::shared::icons::icon;
use contracts::shared::layout::list::StatValue;
use leptos::prelude::*;
use thaw::{Card, Flex, FlexGap};

/// One summary figure above a list
#[component]
pub fn StatCard(stat: StatValue) -> impl IntoView {
    view! {
        <Card class="stat-card" attr:data-stat=stat.id>
            <Flex gap=FlexGap::Medium>
                <div class="stat-card__icon">
                    {icon(stat.icon)}
                </div>
                <div class="stat-card__content">
                    <div class="stat-card__label">{stat.label}</div>
                    <div class="stat-card__value">{stat.value}</div>
                </div>
            </Flex>
        </Card>
    }
}

/// Row of stat cards; renders nothing for an empty list
#[component]
pub fn StatCards(#[prop(into)] stats: Signal<Vec<StatValue>>) -> impl IntoView {
    move || {
        let stats = stats.get();
        (!stats.is_empty()).then(|| {
            view! {
                <Flex class="stat-cards" gap=FlexGap::Medium>
                    {stats
                        .into_iter()
                        .map(|stat| view! { <StatCard stat=stat /> })
                        .collect_view()}
                </Flex>
            }
        })
    }
}

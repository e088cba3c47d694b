//! Multi-step flow with a step indicator and back/skip/next navigation.
//! The caller owns `current_step` and renders the step body as children.

use contracts::shared::layout::wizard::{
    can_click_step, can_skip, enter_triggers_next, handle_back, handle_next, handle_skip,
    progress_percent, step_status, StepStatus, WizardNavigation, WizardStep, WizardTransition,
};
use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::components::{PageHeader, Skeleton};
use crate::shared::icons::icon;
use crate::shared::keyboard::{is_multiline, use_scoped_keydown};

#[derive(Debug, Clone)]
pub struct WizardLayoutConfig {
    pub title: String,
    pub steps: Vec<WizardStep>,
    pub navigation: WizardNavigation,
    pub finish_label: String,
}

impl WizardLayoutConfig {
    pub fn new(title: impl Into<String>, steps: Vec<WizardStep>) -> Self {
        Self {
            title: title.into(),
            steps,
            navigation: WizardNavigation::default(),
            finish_label: "Finish".to_string(),
        }
    }
}

#[component]
pub fn WizardLayout(
    config: WizardLayoutConfig,
    #[prop(into)]
    current_step: Signal<usize>,
    on_step_change: Callback<usize>,
    on_finish: Callback<()>,
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
    /// Defaults to valid
    #[prop(optional, into)]
    is_step_valid: MaybeProp<bool>,
    #[prop(optional, into)]
    is_submitting: MaybeProp<bool>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let nav = config.navigation;
    let step_count = config.steps.len();
    let finish_label = StoredValue::new(config.finish_label.clone());
    let steps = StoredValue::new(config.steps);

    let valid = move || is_step_valid.get().unwrap_or(true);
    let submitting = move || is_submitting.get().unwrap_or(false);
    let is_last = move || current_step.get() + 1 >= step_count;

    let apply = move |transition: WizardTransition| match transition {
        WizardTransition::GoTo(index) => on_step_change.run(index),
        WizardTransition::Finish => on_finish.run(()),
        WizardTransition::Stay => {}
    };
    let next = move || {
        if valid() && !submitting() {
            apply(handle_next(current_step.get_untracked(), step_count));
        }
    };
    let back = move || apply(handle_back(current_step.get_untracked(), nav));
    let skip = move || {
        let transition = steps.with_value(|s| handle_skip(s, current_step.get_untracked(), nav));
        apply(transition);
    };
    let skippable = move || steps.with_value(|s| can_skip(s, current_step.get(), nav));

    use_scoped_keydown("wizard", move |chord, ev| {
        if chord.key != "Enter" || chord.has_modifier() || is_multiline(ev) {
            return;
        }
        if enter_triggers_next(valid(), submitting()) {
            ev.prevent_default();
            next();
        }
    });

    let current = move || {
        steps.with_value(|s| s.get(current_step.get()).cloned())
    };

    view! {
        <Show when=move || !loading.get().unwrap_or(false) fallback=|| view! { <Skeleton /> }>
            <div class="wizard-layout">
                <PageHeader title=config.title.clone()>
                    {on_cancel.map(|cb| view! {
                        <Button variant="ghost" on_click=Callback::new(move |_| cb.run(()))>"Cancel"</Button>
                    })}
                </PageHeader>

                <div class="wizard-layout__progress" role="progressbar">
                    <div
                        class="wizard-layout__progress-bar"
                        style=move || format!("width: {:.0}%", progress_percent(current_step.get(), step_count))
                    ></div>
                </div>

                <ol class="wizard-steps">
                    {steps.with_value(|s| s.iter().enumerate().map(|(index, step)| {
                        let title = step.title.clone();
                        let optional = step.optional;
                        let status = move || step_status(index, current_step.get());
                        view! {
                            <li
                                class="wizard-steps__step"
                                class:wizard-steps__step--completed=move || status() == StepStatus::Completed
                                class:wizard-steps__step--current=move || status() == StepStatus::Current
                                class:wizard-steps__step--clickable=move || can_click_step(index, current_step.get())
                                on:click=move |_| {
                                    if can_click_step(index, current_step.get_untracked()) {
                                        on_step_change.run(index);
                                    }
                                }
                            >
                                <span class="wizard-steps__marker">
                                    {move || match status() {
                                        StepStatus::Completed => icon("check"),
                                        _ => view! { <span>{index + 1}</span> }.into_any(),
                                    }}
                                </span>
                                <span class="wizard-steps__title">{title}</span>
                                {optional.then(|| view! { <span class="wizard-steps__optional">"Optional"</span> })}
                            </li>
                        }
                    }).collect_view())}
                </ol>

                {move || current().map(|step| view! {
                    <div class="wizard-layout__step-header">
                        <h2 class="wizard-layout__step-title">{step.title}</h2>
                        {step.description.map(|d| view! { <p class="wizard-layout__step-description">{d}</p> })}
                    </div>
                })}

                <div class="wizard-layout__body">{children()}</div>

                <div class="wizard-layout__footer">
                    <Show when=move || { nav.allow_back && current_step.get() > 0 }>
                        <Button variant="secondary" icon_name="chevron-left" on_click=Callback::new(move |_| back())>
                            <span class="button__label">"Back"</span>
                        </Button>
                    </Show>
                    <div class="wizard-layout__spacer"></div>
                    <Show when=skippable>
                        <Button variant="ghost" on_click=Callback::new(move |_| skip())>"Skip"</Button>
                    </Show>
                    <Button
                        disabled=Signal::derive(move || !valid() || submitting())
                        on_click=Callback::new(move |_| next())
                    >
                        {move || if is_last() { finish_label.get_value() } else { "Next".to_string() }}
                    </Button>
                </div>
            </div>
        </Show>
    }
}

//! Multi-step wizard navigation. The current step is owned by the caller;
//! these functions only compute what a button or key press should do.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardStep {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub optional: bool,
}

impl WizardStep {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            optional: false,
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardNavigation {
    pub allow_back: bool,
    pub allow_skip: bool,
}

impl Default for WizardNavigation {
    fn default() -> Self {
        Self {
            allow_back: true,
            allow_skip: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardTransition {
    /// Move to the given step index
    GoTo(usize),
    /// Call `on_finish`; the step index does not change
    Finish,
    /// Nothing happens
    Stay,
}

pub fn handle_next(current: usize, step_count: usize) -> WizardTransition {
    if step_count == 0 {
        WizardTransition::Stay
    } else if current + 1 >= step_count {
        WizardTransition::Finish
    } else {
        WizardTransition::GoTo(current + 1)
    }
}

pub fn handle_back(current: usize, nav: WizardNavigation) -> WizardTransition {
    if nav.allow_back && current > 0 {
        WizardTransition::GoTo(current - 1)
    } else {
        WizardTransition::Stay
    }
}

/// Skip behaves like next, but only for optional steps when skipping is allowed
pub fn handle_skip(steps: &[WizardStep], current: usize, nav: WizardNavigation) -> WizardTransition {
    match steps.get(current) {
        Some(step) if step.optional && nav.allow_skip => handle_next(current, steps.len()),
        _ => WizardTransition::Stay,
    }
}

pub fn can_skip(steps: &[WizardStep], current: usize, nav: WizardNavigation) -> bool {
    handle_skip(steps, current, nav) != WizardTransition::Stay
}

/// Completed steps are clickable; the current and later ones are not
pub fn can_click_step(index: usize, current: usize) -> bool {
    index < current
}

pub fn enter_triggers_next(is_step_valid: bool, is_submitting: bool) -> bool {
    is_step_valid && !is_submitting
}

/// Progress through the wizard in percent, `(current + 1) / len`
pub fn progress_percent(current: usize, step_count: usize) -> f64 {
    if step_count == 0 {
        return 0.0;
    }
    ((current + 1).min(step_count) as f64 / step_count as f64) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

pub fn step_status(index: usize, current: usize) -> StepStatus {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => StepStatus::Completed,
        std::cmp::Ordering::Equal => StepStatus::Current,
        std::cmp::Ordering::Greater => StepStatus::Upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> Vec<WizardStep> {
        vec![
            WizardStep::new("details", "Details"),
            WizardStep::new("crew", "Crew").optional(),
            WizardStep::new("review", "Review"),
        ]
    }

    #[test]
    fn next_from_last_step_finishes() {
        assert_eq!(handle_next(2, 3), WizardTransition::Finish);
        assert_eq!(handle_next(0, 3), WizardTransition::GoTo(1));
        assert_eq!(handle_next(0, 0), WizardTransition::Stay);
    }

    #[test]
    fn back_respects_navigation() {
        let nav = WizardNavigation::default();
        assert_eq!(handle_back(1, nav), WizardTransition::GoTo(0));
        assert_eq!(handle_back(0, nav), WizardTransition::Stay);
        let locked = WizardNavigation {
            allow_back: false,
            ..nav
        };
        assert_eq!(handle_back(2, locked), WizardTransition::Stay);
    }

    #[test]
    fn skip_only_optional_steps_when_allowed() {
        let steps = steps();
        let nav = WizardNavigation {
            allow_back: true,
            allow_skip: true,
        };
        assert_eq!(handle_skip(&steps, 1, nav), WizardTransition::GoTo(2));
        assert_eq!(handle_skip(&steps, 0, nav), WizardTransition::Stay);
        assert!(!can_skip(&steps, 1, WizardNavigation::default()));
    }

    #[test]
    fn indicator_clicks_only_go_back() {
        assert!(can_click_step(0, 2));
        assert!(!can_click_step(2, 2));
        assert!(!can_click_step(3, 2));
        assert_eq!(step_status(1, 1), StepStatus::Current);
    }

    #[test]
    fn enter_and_progress() {
        assert!(enter_triggers_next(true, false));
        assert!(!enter_triggers_next(true, true));
        assert!(!enter_triggers_next(false, false));
        assert_eq!(progress_percent(0, 4), 25.0);
        assert_eq!(progress_percent(3, 4), 100.0);
    }
}

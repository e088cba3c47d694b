//! Light/dark theme.
//!
//! The choice lives in context and in localStorage; without a stored choice
//! the browser's `prefers-color-scheme` decides. Stylesheets key off the
//! `data-theme` attribute on `<body>`.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::shared::storage::{load_json, save_json};

const THEME_STORAGE_KEY: &str = "app-theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A stored choice wins over the system preference
pub fn initial_theme(stored: Option<Theme>, prefers_dark: bool) -> Theme {
    stored.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Switch and remember the choice
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_json(THEME_STORAGE_KEY, &theme);
        apply_theme(theme);
        log::debug!("theme: {}", theme.as_str());
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = initial_theme(load_json(THEME_STORAGE_KEY), prefers_dark());
    apply_theme(theme);
    provide_context(ThemeContext {
        theme: RwSignal::new(theme),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_beats_system_preference() {
        assert_eq!(initial_theme(Some(Theme::Light), true), Theme::Light);
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn stored_form_matches_attribute() {
        for theme in Theme::all() {
            assert_eq!(serde_json::to_string(&theme).unwrap(), format!("\"{}\"", theme.as_str()));
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }
}

// src/editor/header.rs

use crate::{
    models::execution::Language,
    routes::{Navigator, Route},
};

use super::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: &'static str,
    pub selected: bool,
}

/// Render model of the editor toolbar. Holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorHeader {
    pub languages: Vec<SelectOption<Language>>,
    pub themes: Vec<SelectOption<Theme>>,
    pub run_label: &'static str,
    pub run_enabled: bool,
}

impl EditorHeader {
    pub fn new(language: Language, theme: Theme, is_running: bool) -> Self {
        let languages = Language::ALL
            .iter()
            .map(|&value| SelectOption {
                value,
                label: value.label(),
                selected: value == language,
            })
            .collect();

        let themes = Theme::ALL
            .iter()
            .map(|&value| SelectOption {
                value,
                label: match value {
                    Theme::Light => "Light",
                    Theme::Dark => "Dark",
                },
                selected: value == theme,
            })
            .collect();

        Self {
            languages,
            themes,
            run_label: if is_running { "Running..." } else { "Run Code" },
            run_enabled: !is_running,
        }
    }

    /// "Leave" button.
    pub fn leave(navigator: &dyn Navigator) {
        navigator.navigate(Route::StudentDashboard);
    }
}

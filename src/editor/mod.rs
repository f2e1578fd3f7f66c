// src/editor/mod.rs

//! Practice/exam code editor: the editor shell, its header controls, the
//! output console and the question panel.

pub mod console;
pub mod header;
pub mod page;
pub mod question_panel;
pub mod run;
pub mod templates;

use std::fmt;
use std::str::FromStr;

use crate::{
    client::{ApiClient, CodeRunner},
    models::{execution::Language, question::Question},
};

pub use run::{RunOutcome, RunPanel};

/// Editor color scheme. Console and question panel follow it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Identifier understood by the editor widget.
    pub fn widget_id(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "vs-dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "vs" | "vs-light" => Ok(Theme::Light),
            "dark" | "vs-dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Construction inputs for [`CodeEditor`].
#[derive(Debug, Clone, Default)]
pub struct EditorProps {
    pub session_id: String,
    pub username: String,
    /// Supplied by the exam page; the practice page leaves it empty and the
    /// editor fetches its own on mount.
    pub question: Option<Question>,
    pub language: Language,
    pub theme: Theme,
    /// Existing code to open with. Defaults to the language template.
    pub initial_code: Option<String>,
}

type CodeCallback = Box<dyn FnMut(&str) + Send>;
type LanguageCallback = Box<dyn FnMut(Language) + Send>;

/// The editor shell for one question.
pub struct CodeEditor {
    session_id: String,
    username: String,
    question: Option<Question>,
    code: String,
    language: Language,
    theme: Theme,
    panel: RunPanel,
    on_code_change: Option<CodeCallback>,
    on_language_change: Option<LanguageCallback>,
}

impl fmt::Debug for CodeEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeEditor")
            .field("session_id", &self.session_id)
            .field("username", &self.username)
            .field("question", &self.question.as_ref().map(|q| &q.id))
            .field("language", &self.language)
            .field("theme", &self.theme)
            .field("is_running", &self.panel.is_running())
            .finish()
    }
}

impl CodeEditor {
    pub fn new(props: EditorProps) -> Self {
        let code = props
            .initial_code
            .unwrap_or_else(|| templates::template(props.language).to_string());
        Self {
            session_id: props.session_id,
            username: props.username,
            question: props.question,
            code,
            language: props.language,
            theme: props.theme,
            panel: RunPanel::default(),
            on_code_change: None,
            on_language_change: None,
        }
    }

    pub fn on_code_change(mut self, callback: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_code_change = Some(Box::new(callback));
        self
    }

    pub fn on_language_change(mut self, callback: impl FnMut(Language) + Send + 'static) -> Self {
        self.on_language_change = Some(Box::new(callback));
        self
    }

    /// Loads the session's question unless one was passed in.
    /// Failures leave the editor without a question panel.
    pub async fn mount(&mut self, api: &ApiClient) {
        if self.question.is_some() {
            return;
        }
        let path = format!("/coding-exam/session/{}/question", self.session_id);
        match api.get::<Question>(&path).await {
            Ok(question) => {
                tracing::info!("loaded question {} for session {}", question.id, self.session_id);
                self.question = Some(question);
            }
            Err(e) => {
                tracing::warn!("no question for session {}: {}", self.session_id, e);
                self.question = None;
            }
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn panel(&self) -> &RunPanel {
        &self.panel
    }

    pub fn output(&self) -> &str {
        self.panel.output()
    }

    pub fn is_running(&self) -> bool {
        self.panel.is_running()
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
        if let Some(cb) = self.on_code_change.as_mut() {
            cb(&self.code);
        }
    }

    /// Switches language. Returns true when the content was replaced by the
    /// new language's template.
    pub fn set_language(&mut self, language: Language) -> bool {
        let replaced = match templates::content_after_switch(&self.code, language) {
            Some(template) => {
                self.code = template.to_string();
                if let Some(cb) = self.on_code_change.as_mut() {
                    cb(&self.code);
                }
                true
            }
            None => false,
        };
        self.language = language;
        if let Some(cb) = self.on_language_change.as_mut() {
            cb(language);
        }
        replaced
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_custom_input(&mut self, input: impl Into<String>) {
        self.panel.custom_input = input.into();
    }

    pub fn custom_input(&self) -> &str {
        &self.panel.custom_input
    }

    pub async fn run(&mut self, runner: &dyn CodeRunner) -> RunOutcome {
        self.panel.run(runner, self.language, &self.code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn editor(language: Language) -> CodeEditor {
        CodeEditor::new(EditorProps {
            session_id: "s-1".into(),
            username: "asha".into(),
            language,
            ..Default::default()
        })
    }

    #[test]
    fn opens_with_the_language_template() {
        let ed = editor(Language::Python);
        assert_eq!(ed.code(), templates::template(Language::Python));
    }

    #[test]
    fn switching_untouched_editor_loads_new_template() {
        let mut ed = editor(Language::Python);
        assert!(ed.set_language(Language::Java));
        assert_eq!(ed.code(), templates::template(Language::Java));
        assert_eq!(ed.language(), Language::Java);
    }

    #[test]
    fn switching_edited_editor_keeps_code() {
        let mut ed = editor(Language::Python);
        ed.set_code("print(sum(map(int, input().split())))");
        assert!(!ed.set_language(Language::Cpp));
        assert_eq!(ed.code(), "print(sum(map(int, input().split())))");
        assert_eq!(ed.language(), Language::Cpp);
    }

    #[test]
    fn callbacks_report_changes() {
        let codes = Arc::new(Mutex::new(Vec::new()));
        let langs = Arc::new(Mutex::new(Vec::new()));
        let (c, l) = (codes.clone(), langs.clone());
        let mut ed = editor(Language::Javascript)
            .on_code_change(move |code| c.lock().unwrap().push(code.to_string()))
            .on_language_change(move |lang| l.lock().unwrap().push(lang));

        ed.set_language(Language::C);
        ed.set_code("int main(){return 0;}");
        ed.set_language(Language::Cpp);

        assert_eq!(
            *codes.lock().unwrap(),
            vec![
                templates::template(Language::C).to_string(),
                "int main(){return 0;}".to_string()
            ]
        );
        assert_eq!(*langs.lock().unwrap(), vec![Language::C, Language::Cpp]);
    }

    #[test]
    fn theme_parses_widget_ids() {
        assert_eq!("vs-dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(Theme::Light.widget_id(), "light");
    }
}

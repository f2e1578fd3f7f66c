// src/editor/page.rs

use crate::{
    client::{ApiClient, CodeRunner},
    models::execution::Language,
    routes::Navigator,
    session::SessionStore,
};

use super::{
    CodeEditor, EditorProps, RunOutcome, Theme, console::OutputConsole, header::EditorHeader,
    question_panel::QuestionPanel,
};

/// Practice page: header, question panel, editor and console for one
/// practice session.
#[derive(Debug)]
pub struct EditorPage {
    editor: CodeEditor,
}

impl EditorPage {
    /// The username comes from the stored session; anonymous sessions show as "guest".
    pub fn new(session_id: impl Into<String>, session: &SessionStore) -> Self {
        let username = session
            .session()
            .username
            .clone()
            .unwrap_or_else(|| "guest".to_string());
        let editor = CodeEditor::new(EditorProps {
            session_id: session_id.into(),
            username,
            question: None,
            language: Language::default(),
            theme: Theme::default(),
            initial_code: None,
        });
        Self { editor }
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.editor.mount(api).await;
    }

    pub fn editor(&self) -> &CodeEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut CodeEditor {
        &mut self.editor
    }

    pub fn header(&self) -> EditorHeader {
        EditorHeader::new(
            self.editor.language(),
            self.editor.theme(),
            self.editor.is_running(),
        )
    }

    pub fn question_panel(&self) -> Option<QuestionPanel> {
        self.editor
            .question()
            .map(|q| QuestionPanel::render(q, self.editor.theme()))
    }

    pub fn console(&self) -> OutputConsole {
        OutputConsole::render(self.editor.output(), self.editor.theme())
    }

    pub async fn run(&mut self, runner: &dyn CodeRunner) -> RunOutcome {
        self.editor.run(runner).await
    }

    pub fn leave(&self, navigator: &dyn Navigator) {
        tracing::info!(
            "{} left practice session {}",
            self.editor.username(),
            self.editor.session_id()
        );
        EditorHeader::leave(navigator);
    }
}

// src/editor/run.rs

use crate::{
    client::CodeRunner,
    error::AppError,
    models::execution::{ExecutionResult, Language, RunRequest},
    utils::input::missing_required_input,
};

pub const NEEDS_INPUT_MESSAGE: &str =
    "This program reads from standard input. Enter values in the custom input box before running.";

pub const RUNNING_MESSAGE: &str = "Running...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Refused locally: the code reads stdin and the input box is empty.
    Blocked,
    /// A run is already in flight.
    Busy,
    Completed,
    /// Transport or backend failure; the console shows the error.
    Failed,
}

/// Custom-input box, output console text and the in-flight flag.
/// Shared by the practice editor and the exam page.
#[derive(Debug, Clone, Default)]
pub struct RunPanel {
    pub custom_input: String,
    output: String,
    is_running: bool,
}

impl RunPanel {
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Applies the local checks and marks the panel busy.
    /// Returns the request to send, or why nothing should be sent.
    pub fn begin(&mut self, language: Language, code: &str) -> Result<RunRequest, RunOutcome> {
        if self.is_running {
            return Err(RunOutcome::Busy);
        }
        if missing_required_input(code, &self.custom_input) {
            self.output = NEEDS_INPUT_MESSAGE.to_string();
            return Err(RunOutcome::Blocked);
        }
        self.is_running = true;
        self.output = RUNNING_MESSAGE.to_string();
        Ok(RunRequest {
            language,
            code: code.to_string(),
            stdin: self.custom_input.clone(),
        })
    }

    /// Renders the response (or the failure) and clears the busy flag.
    pub fn finish(&mut self, result: Result<ExecutionResult, AppError>) -> RunOutcome {
        self.is_running = false;
        match result {
            Ok(result) => {
                self.output = result.to_display();
                RunOutcome::Completed
            }
            Err(e) => {
                tracing::warn!("run failed: {}", e);
                self.output = format!("Error: {}", e.toast_message());
                RunOutcome::Failed
            }
        }
    }

    pub async fn run(
        &mut self,
        runner: &dyn CodeRunner,
        language: Language,
        code: &str,
    ) -> RunOutcome {
        let request = match self.begin(language, code) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        tracing::info!("running {} snippet ({} bytes)", language, request.code.len());
        let result = runner.run(&request).await;
        self.finish(result)
    }
}

// src/handlers/coding_exam.rs

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::{
    client::{ApiClient, CodeRunner},
    editor::{
        RunOutcome, RunPanel, Theme, console::OutputConsole, header::EditorHeader,
        question_panel::QuestionPanel, templates,
    },
    error::AppError,
    models::{
        exam::{
            Answer, CodingExam, ExamSummary, SubmitExamRequest, SubmitExamResponse, SubmittedAnswer,
        },
        execution::Language,
        question::Question,
    },
    notify::{Confirm, Notifier, Toast},
    routes::{Navigator, Route},
};

pub const SUBMIT_CONFIRMATION: &str =
    "Are you sure you want to submit the exam? You cannot change your answers afterwards.";

/// The student's assessment list. Failures show a toast and an empty list.
pub async fn list_exams(api: &ApiClient, notifier: &dyn Notifier) -> Vec<ExamSummary> {
    match api.get::<Vec<ExamSummary>>("/coding-exam/student/list").await {
        Ok(exams) => exams,
        Err(e) => {
            tracing::error!("Failed to fetch exams: {:?}", e);
            notifier.notify(Toast::error("Failed to load assessments"));
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamPhase {
    Loading,
    InProgress,
    Submitted,
}

/// The timed multi-question exam page.
///
/// Answers live in a map keyed by question id. `current_index` only selects
/// which entry the editor shows, so moving between questions never loses
/// edits.
#[derive(Debug)]
pub struct StudentCodingExam {
    exam_id: String,
    phase: ExamPhase,
    exam: Option<CodingExam>,
    current_index: usize,
    answers: HashMap<String, Answer>,
    panel: RunPanel,
    theme: Theme,
    submitting: bool,
}

impl StudentCodingExam {
    pub fn new(exam_id: impl Into<String>) -> Self {
        Self {
            exam_id: exam_id.into(),
            phase: ExamPhase::Loading,
            exam: None,
            current_index: 0,
            answers: HashMap::new(),
            panel: RunPanel::default(),
            theme: Theme::default(),
            submitting: false,
        }
    }

    /// Fetches the exam. Failure is fatal for the page: toast, then back to
    /// the assessment list.
    pub async fn load(
        &mut self,
        api: &ApiClient,
        notifier: &dyn Notifier,
        navigator: &dyn Navigator,
    ) -> Result<(), AppError> {
        let path = format!("/coding-exam/{}", self.exam_id);
        match api.get::<CodingExam>(&path).await {
            Ok(exam) => {
                tracing::info!(
                    "exam {} loaded with {} questions",
                    exam.id,
                    exam.questions.len()
                );
                self.start(exam);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load exam {}: {}", self.exam_id, e);
                notifier.notify(Toast::error(format!(
                    "Failed to load exam: {}",
                    e.toast_message()
                )));
                navigator.navigate(Route::StudentAssessments);
                Err(e)
            }
        }
    }

    /// Enters InProgress on the first question.
    pub fn start(&mut self, exam: CodingExam) {
        self.exam = Some(exam);
        self.phase = ExamPhase::InProgress;
        self.current_index = 0;
        self.answers.clear();
        self.seed_current();
    }

    pub fn phase(&self) -> ExamPhase {
        self.phase
    }

    pub fn exam(&self) -> Option<&CodingExam> {
        self.exam.as_ref()
    }

    pub fn questions(&self) -> &[Question] {
        self.exam.as_ref().map(|e| e.questions.as_slice()).unwrap_or(&[])
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions().get(self.current_index)
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        let question = self.current_question()?;
        self.answers.get(&question.id)
    }

    pub fn answers(&self) -> &HashMap<String, Answer> {
        &self.answers
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), AppError> {
        self.ensure_in_progress()?;
        let count = self.questions().len();
        if index >= count {
            return Err(AppError::Validation(format!(
                "Question {} does not exist (exam has {}).",
                index + 1,
                count
            )));
        }
        self.current_index = index;
        self.panel.clear_output();
        self.seed_current();
        Ok(())
    }

    pub fn next(&mut self) -> Result<(), AppError> {
        self.go_to(self.current_index + 1)
    }

    pub fn previous(&mut self) -> Result<(), AppError> {
        match self.current_index.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => Err(AppError::Validation("Already at the first question.".to_string())),
        }
    }

    pub fn set_code(&mut self, code: impl Into<String>) -> Result<(), AppError> {
        self.ensure_in_progress()?;
        let answer = self.current_answer_mut()?;
        answer.code = code.into();
        Ok(())
    }

    /// Same template rule as the practice editor. Returns true when the
    /// code was replaced.
    pub fn set_language(&mut self, language: Language) -> Result<bool, AppError> {
        self.ensure_in_progress()?;
        let answer = self.current_answer_mut()?;
        let replaced = match templates::content_after_switch(&answer.code, language) {
            Some(template) => {
                answer.code = template.to_string();
                true
            }
            None => false,
        };
        answer.language = language;
        Ok(replaced)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_custom_input(&mut self, input: impl Into<String>) {
        self.panel.custom_input = input.into();
    }

    pub fn output(&self) -> &str {
        self.panel.output()
    }

    /// Runs the current answer against the custom input.
    pub async fn run(&mut self, runner: &dyn CodeRunner) -> Result<RunOutcome, AppError> {
        self.ensure_in_progress()?;
        let answer = self
            .current_answer()
            .cloned()
            .ok_or_else(|| AppError::Validation("No question selected.".to_string()))?;
        Ok(self.panel.run(runner, answer.language, &answer.code).await)
    }

    /// Submit payload: one entry per answer, in question order.
    pub fn submission(&self) -> Vec<SubmittedAnswer> {
        self.questions()
            .iter()
            .filter_map(|q| {
                self.answers.get(&q.id).map(|a| SubmittedAnswer {
                    question_id: q.id.clone(),
                    code: a.code.clone(),
                    language: a.language,
                })
            })
            .collect()
    }

    /// Asks for confirmation, then sends every answer.
    ///
    /// * Declined -> `Ok(None)`, nothing sent.
    /// * Success -> Submitted, score toast, back to the assessment list.
    /// * Failure -> raw server error toast, still InProgress so the user can retry.
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        confirm: &dyn Confirm,
        notifier: &dyn Notifier,
        navigator: &dyn Navigator,
    ) -> Result<Option<SubmitExamResponse>, AppError> {
        self.ensure_in_progress()?;
        if self.submitting {
            return Err(AppError::Busy("Submission already in progress.".to_string()));
        }
        if !confirm.confirm(SUBMIT_CONFIRMATION) {
            tracing::debug!("submit of exam {} cancelled", self.exam_id);
            return Ok(None);
        }

        let body = SubmitExamRequest {
            answers: self.submission(),
        };
        tracing::info!(
            "submitting exam {} with {} answers",
            self.exam_id,
            body.answers.len()
        );

        self.submitting = true;
        let path = format!("/coding-exam/{}/submit", self.exam_id);
        let response = api.post_optional::<_, SubmitExamResponse>(&path, &body).await;
        self.submitting = false;

        match response {
            Ok(result) => {
                let result = result.unwrap_or_default();
                self.phase = ExamPhase::Submitted;
                notifier.notify(Toast::success(self.score_message(&result)));
                navigator.navigate(Route::StudentAssessments);
                Ok(Some(result))
            }
            Err(e) => {
                tracing::error!("Failed to submit exam {}: {}", self.exam_id, e);
                notifier.notify(Toast::error(e.toast_message()));
                Err(e)
            }
        }
    }

    /// Time left before the deadline, clamped at zero. Display only.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        let deadline = self.exam.as_ref()?.deadline()?;
        Some((deadline - now).max(Duration::zero()))
    }

    /// `HH:MM:SS` for the header timer.
    pub fn timer_label(&self, now: DateTime<Utc>) -> Option<String> {
        let left = self.time_remaining(now)?.num_seconds();
        Some(format!(
            "{:02}:{:02}:{:02}",
            left / 3600,
            (left % 3600) / 60,
            left % 60
        ))
    }

    pub fn header(&self) -> EditorHeader {
        let language = self
            .current_answer()
            .map(|a| a.language)
            .unwrap_or_default();
        EditorHeader::new(language, self.theme, self.panel.is_running())
    }

    pub fn question_panel(&self) -> Option<QuestionPanel> {
        self.current_question()
            .map(|q| QuestionPanel::render(q, self.theme))
    }

    pub fn console(&self) -> OutputConsole {
        OutputConsole::render(self.panel.output(), self.theme)
    }

    fn score_message(&self, result: &SubmitExamResponse) -> String {
        let max = result
            .max_score
            .or_else(|| self.exam.as_ref().map(|e| e.points_available()));
        match (result.total_score, max) {
            (Some(score), Some(max)) => {
                format!("Exam submitted successfully! Score: {}/{}", score, max)
            }
            (Some(score), None) => format!("Exam submitted successfully! Score: {}", score),
            _ => "Exam submitted successfully!".to_string(),
        }
    }

    /// First visit to a question creates its answer from the default template.
    fn seed_current(&mut self) {
        let Some(id) = self.current_question().map(|q| q.id.clone()) else {
            return;
        };
        self.answers.entry(id).or_insert_with(|| {
            let language = Language::default();
            Answer {
                code: templates::template(language).to_string(),
                language,
            }
        });
    }

    fn current_answer_mut(&mut self) -> Result<&mut Answer, AppError> {
        let id = self
            .current_question()
            .map(|q| q.id.clone())
            .ok_or_else(|| AppError::Validation("No question selected.".to_string()))?;
        self.seed_current();
        self.answers
            .get_mut(&id)
            .ok_or_else(|| AppError::Validation("No question selected.".to_string()))
    }

    fn ensure_in_progress(&self) -> Result<(), AppError> {
        match self.phase {
            ExamPhase::InProgress => Ok(()),
            ExamPhase::Loading => Err(AppError::Validation("Exam is still loading.".to_string())),
            ExamPhase::Submitted => Err(AppError::Validation(
                "Exam has already been submitted.".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, points: u32) -> Question {
        Question {
            id: id.into(),
            title: format!("Question {}", id),
            description: String::new(),
            constraints: String::new(),
            points,
            public_test_cases: Vec::new(),
        }
    }

    fn exam() -> CodingExam {
        CodingExam {
            id: "e1".into(),
            assessment_name: "Campus Drive".into(),
            questions: vec![question("A", 10), question("B", 20)],
            start_time: None,
            end_time: "2026-05-01T12:00:00Z".parse().ok(),
            duration_minutes: None,
            total_score: None,
            max_score: None,
        }
    }

    fn started() -> StudentCodingExam {
        let mut page = StudentCodingExam::new("e1");
        page.start(exam());
        page
    }

    #[test]
    fn starts_on_first_question_with_seeded_answer() {
        let page = started();
        assert_eq!(page.phase(), ExamPhase::InProgress);
        assert_eq!(page.current_question().unwrap().id, "A");
        assert_eq!(page.answers().len(), 1);
        assert_eq!(
            page.current_answer().unwrap().code,
            templates::template(Language::Javascript)
        );
    }

    #[test]
    fn edits_survive_moving_between_questions() {
        let mut page = started();
        page.set_code("x=1").unwrap();
        page.next().unwrap();
        page.set_language(Language::Python).unwrap();
        page.set_code("y=2").unwrap();
        page.previous().unwrap();

        assert_eq!(page.current_answer().unwrap().code, "x=1");
        assert_eq!(
            page.submission(),
            vec![
                SubmittedAnswer {
                    question_id: "A".into(),
                    code: "x=1".into(),
                    language: Language::Javascript,
                },
                SubmittedAnswer {
                    question_id: "B".into(),
                    code: "y=2".into(),
                    language: Language::Python,
                },
            ]
        );
    }

    #[test]
    fn unvisited_questions_are_not_submitted() {
        let page = started();
        let submission = page.submission();
        assert_eq!(submission.len(), 1);
        assert_eq!(submission[0].question_id, "A");
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut page = started();
        assert!(matches!(page.go_to(2), Err(AppError::Validation(_))));
        assert!(page.previous().is_err());
        assert_eq!(page.current_index(), 0);
    }

    #[test]
    fn actions_refused_while_loading() {
        let mut page = StudentCodingExam::new("e1");
        assert_eq!(page.phase(), ExamPhase::Loading);
        assert!(page.set_code("x").is_err());
        assert!(page.next().is_err());
    }

    #[test]
    fn timer_counts_down_and_stops_at_zero() {
        let page = started();
        let now: DateTime<Utc> = "2026-05-01T10:58:30Z".parse().unwrap();
        assert_eq!(page.timer_label(now).as_deref(), Some("01:01:30"));
        let late: DateTime<Utc> = "2026-05-01T13:00:00Z".parse().unwrap();
        assert_eq!(page.timer_label(late).as_deref(), Some("00:00:00"));
    }

    #[test]
    fn score_message_falls_back_to_question_points() {
        let page = started();
        let msg = page.score_message(&SubmitExamResponse {
            total_score: Some(25),
            max_score: None,
            message: None,
        });
        assert_eq!(msg, "Exam submitted successfully! Score: 25/30");
    }
}

// src/models/exam.rs

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{execution::Language, question::Question, string_or_number};

/// A timed coding assessment as the student sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingExam {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "assessment_name", alias = "title", alias = "name")]
    pub assessment_name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default, alias = "start_time")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, alias = "end_time")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, alias = "duration", alias = "duration_minutes")]
    pub duration_minutes: Option<i64>,
    #[serde(default, alias = "total_score")]
    pub total_score: Option<u32>,
    #[serde(default, alias = "max_score")]
    pub max_score: Option<u32>,
}

impl CodingExam {
    /// Deadline shown by the timer: `endTime`, else start plus duration.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.end_time.or_else(|| {
            let start = self.start_time?;
            let minutes = self.duration_minutes?;
            Some(start + Duration::minutes(minutes))
        })
    }

    /// Sum of question points, used when the backend omits `maxScore`.
    pub fn points_available(&self) -> u32 {
        self.max_score
            .unwrap_or_else(|| self.questions.iter().map(|q| q.points).sum())
    }
}

/// Entry in the student's assessment list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSummary {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "assessment_name", alias = "title", alias = "name")]
    pub assessment_name: String,
    #[serde(default, alias = "start_time")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, alias = "end_time")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, alias = "is_submitted")]
    pub submitted: bool,
}

/// The student's working copy for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub code: String,
    pub language: Language,
}

/// One element of the submit payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: String,
    pub code: String,
    pub language: Language,
}

/// DTO for `POST /coding-exam/{id}/submit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitExamRequest {
    pub answers: Vec<SubmittedAnswer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SubmitExamResponseWire")]
pub struct SubmitExamResponse {
    pub total_score: Option<u32>,
    pub max_score: Option<u32>,
    pub message: Option<String>,
}

/// The score may arrive under several keys, sometimes more than one at once.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitExamResponseWire {
    #[serde(default)]
    total_score: Option<u32>,
    #[serde(default, rename = "total_score")]
    total_score_snake: Option<u32>,
    #[serde(default)]
    score: Option<u32>,
    #[serde(default)]
    max_score: Option<u32>,
    #[serde(default, rename = "max_score")]
    max_score_snake: Option<u32>,
    #[serde(default)]
    message: Option<String>,
}

impl From<SubmitExamResponseWire> for SubmitExamResponse {
    fn from(wire: SubmitExamResponseWire) -> Self {
        Self {
            total_score: wire.total_score.or(wire.total_score_snake).or(wire.score),
            max_score: wire.max_score.or(wire.max_score_snake),
            message: wire.message,
        }
    }
}

// src/models/assessment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{question::TestCase, string_or_number};

/// A question as the recruiter authors it. Hidden cases are write-only.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    #[validate(length(min = 1, max = 200, message = "Question title is required."))]
    pub title: String,
    #[validate(length(min = 1, max = 20000, message = "Question description is required."))]
    pub description: String,
    pub constraints: String,
    #[validate(range(min = 1, max = 1000, message = "Points must be between 1 and 1000."))]
    pub points: u32,
    pub public_test_cases: Vec<TestCase>,
    pub hidden_test_cases: Vec<TestCase>,
}

/// DTO for `POST /exam/recruiter/create`.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentRequest {
    #[validate(length(min = 1, max = 200, message = "Assessment name is required."))]
    pub assessment_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[validate(length(min = 1, message = "Add at least one question."), nested)]
    pub questions: Vec<QuestionDraft>,
}

impl CreateAssessmentRequest {
    /// Field checks plus the window ordering the form enforces.
    pub fn check(&self) -> Result<(), crate::error::AppError> {
        self.validate()?;
        if self.end_time <= self.start_time {
            return Err(crate::error::AppError::Validation(
                "End time must be after start time.".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "assessment_name", alias = "name")]
    pub assessment_name: String,
    #[serde(default, alias = "start_time")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, alias = "end_time")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, alias = "question_count")]
    pub question_count: Option<u32>,
}

/// One candidate's row in the results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CandidateResultWire")]
pub struct CandidateResult {
    pub student_name: String,
    pub email: Option<String>,
    pub total_score: u32,
    pub max_score: Option<u32>,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Name and score keys vary between endpoints and can repeat in one row.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateResultWire {
    #[serde(default)]
    student_name: Option<String>,
    #[serde(default, rename = "student_name")]
    student_name_snake: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    total_score: Option<u32>,
    #[serde(default, rename = "total_score")]
    total_score_snake: Option<u32>,
    #[serde(default)]
    score: Option<u32>,
    #[serde(default, alias = "max_score")]
    max_score: Option<u32>,
    #[serde(default, alias = "submitted_at")]
    submitted_at: Option<DateTime<Utc>>,
}

impl From<CandidateResultWire> for CandidateResult {
    fn from(wire: CandidateResultWire) -> Self {
        Self {
            student_name: wire
                .student_name
                .or(wire.student_name_snake)
                .or(wire.name)
                .unwrap_or_default(),
            email: wire.email,
            total_score: wire
                .total_score
                .or(wire.total_score_snake)
                .or(wire.score)
                .unwrap_or_default(),
            max_score: wire.max_score,
            submitted_at: wire.submitted_at,
        }
    }
}

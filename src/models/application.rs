// src/models/application.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::string_or_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[serde(alias = "applied")]
    Pending,
    Shortlisted,
    Rejected,
    #[serde(alias = "hired")]
    Selected,
}

/// A student's application to a posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "job_id", deserialize_with = "string_or_number")]
    pub job_id: String,
    #[serde(default, alias = "job_title")]
    pub job_title: Option<String>,
    #[serde(default, alias = "company_name")]
    pub company_name: Option<String>,
    #[serde(default, alias = "student_name")]
    pub student_name: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default, alias = "applied_at", alias = "createdAt")]
    pub applied_at: Option<DateTime<Utc>>,
}

/// DTO for `PUT /applications/{id}/status` (recruiter).
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

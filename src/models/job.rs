// src/models/job.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::string_or_number;

/// A job posting. Listing pages render these as cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "job_title")]
    pub title: String,
    /// Arrives as `companyName` or `company_name` depending on the endpoint.
    #[serde(default, alias = "company_name", alias = "company")]
    pub company_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "salary", alias = "package")]
    pub ctc: Option<String>,
    #[serde(default, alias = "min_cgpa")]
    pub min_cgpa: Option<f64>,
    #[serde(default, alias = "last_date", alias = "deadline")]
    pub last_date: Option<NaiveDate>,
    #[serde(default, alias = "is_approved")]
    pub approved: bool,
}

/// DTO for creating or updating a posting (recruiter).
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    #[validate(length(min = 1, max = 150, message = "Job title is required."))]
    pub title: String,
    #[validate(length(min = 1, max = 200, message = "Company name is required."))]
    pub company_name: String,
    #[validate(length(min = 1, max = 10000, message = "Description is required."))]
    pub description: String,
    pub location: Option<String>,
    pub ctc: Option<String>,
    #[validate(range(min = 0.0, max = 10.0, message = "Minimum CGPA must be between 0 and 10."))]
    pub min_cgpa: Option<f64>,
    pub last_date: Option<NaiveDate>,
}

impl From<&JobPosting> for JobRequest {
    fn from(job: &JobPosting) -> Self {
        Self {
            title: job.title.clone(),
            company_name: job.company_name.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            ctc: job.ctc.clone(),
            min_cgpa: job.min_cgpa,
            last_date: job.last_date,
        }
    }
}

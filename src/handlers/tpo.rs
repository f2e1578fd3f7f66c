// src/handlers/tpo.rs

use crate::{
    client::ApiClient,
    error::AppError,
    models::job::JobPosting,
    notify::{Notifier, Toast},
};

/// Postings waiting for placement-office approval.
pub async fn pending_jobs(api: &ApiClient, notifier: &dyn Notifier) -> Vec<JobPosting> {
    match api.get::<Vec<JobPosting>>("/tpo/jobs/pending").await {
        Ok(jobs) => jobs.into_iter().filter(|j| !j.approved).collect(),
        Err(e) => {
            tracing::error!("Failed to fetch pending jobs: {:?}", e);
            notifier.notify(Toast::error("Failed to load pending jobs"));
            Vec::new()
        }
    }
}

pub async fn approve_job(api: &ApiClient, job_id: &str, notifier: &dyn Notifier) -> Result<(), AppError> {
    let path = format!("/tpo/jobs/{}/approve", job_id);
    match api
        .put_optional::<_, serde_json::Value>(&path, &serde_json::json!({}))
        .await
    {
        Ok(_) => {
            tracing::info!("Job {} approved", job_id);
            notifier.notify(Toast::success("Job approved"));
            Ok(())
        }
        Err(e) => {
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

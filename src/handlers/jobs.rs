// src/handlers/jobs.rs

use validator::Validate;

use crate::{
    client::ApiClient,
    error::AppError,
    models::job::{JobPosting, JobRequest},
    notify::{Notifier, Toast},
    routes::{Navigator, Route},
};

/// Lists open postings. Failures show a toast and an empty list.
pub async fn list_jobs(api: &ApiClient, notifier: &dyn Notifier) -> Vec<JobPosting> {
    match api.get::<Vec<JobPosting>>("/job/all").await {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::error!("Failed to fetch jobs: {:?}", e);
            notifier.notify(Toast::error("Failed to load jobs"));
            Vec::new()
        }
    }
}

pub async fn get_job(api: &ApiClient, id: &str) -> Result<JobPosting, AppError> {
    api.get(&format!("/job/{}", id)).await
}

/// Creates a posting (recruiter) and returns to the recruiter's job list.
pub async fn create_job(
    api: &ApiClient,
    payload: &JobRequest,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> Result<JobPosting, AppError> {
    check(payload, notifier)?;

    match api.post::<_, JobPosting>("/job/create", payload).await {
        Ok(job) => {
            tracing::info!("Job {} created", job.id);
            notifier.notify(Toast::success("Job posted successfully"));
            navigator.navigate(Route::RecruiterJobs);
            Ok(job)
        }
        Err(e) => {
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

pub async fn update_job(
    api: &ApiClient,
    id: &str,
    payload: &JobRequest,
    notifier: &dyn Notifier,
) -> Result<(), AppError> {
    check(payload, notifier)?;

    match api
        .put_optional::<_, serde_json::Value>(&format!("/job/{}", id), payload)
        .await
    {
        Ok(_) => {
            notifier.notify(Toast::success("Job updated successfully"));
            Ok(())
        }
        Err(e) => {
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

pub async fn delete_job(api: &ApiClient, id: &str, notifier: &dyn Notifier) -> Result<(), AppError> {
    match api.delete(&format!("/job/{}", id)).await {
        Ok(()) => {
            notifier.notify(Toast::success("Job deleted"));
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to delete job {}: {:?}", id, e);
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

fn check(payload: &JobRequest, notifier: &dyn Notifier) -> Result<(), AppError> {
    if let Err(validation_errors) = payload.validate() {
        let err = AppError::from(validation_errors);
        notifier.notify(Toast::error(err.toast_message()));
        return Err(err);
    }
    Ok(())
}

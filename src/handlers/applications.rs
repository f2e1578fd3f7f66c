// src/handlers/applications.rs

use crate::{
    client::ApiClient,
    error::AppError,
    models::application::{Application, ApplicationStatus, UpdateStatusRequest},
    notify::{Notifier, Toast},
};

/// Student applies to a posting.
pub async fn apply(api: &ApiClient, job_id: &str, notifier: &dyn Notifier) -> Result<(), AppError> {
    let path = format!("/applications/apply/{}", job_id);
    match api
        .post_optional::<_, serde_json::Value>(&path, &serde_json::json!({}))
        .await
    {
        Ok(_) => {
            tracing::info!("Applied to job {}", job_id);
            notifier.notify(Toast::success("Application submitted"));
            Ok(())
        }
        Err(e) => {
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

/// The student's own applications. Failures show a toast and an empty list.
pub async fn my_applications(api: &ApiClient, notifier: &dyn Notifier) -> Vec<Application> {
    list(api, "/applications/my", notifier).await
}

/// Applicants for one posting (recruiter).
pub async fn applicants_for_job(
    api: &ApiClient,
    job_id: &str,
    notifier: &dyn Notifier,
) -> Vec<Application> {
    list(api, &format!("/applications/job/{}", job_id), notifier).await
}

pub async fn update_status(
    api: &ApiClient,
    application_id: &str,
    status: ApplicationStatus,
    notifier: &dyn Notifier,
) -> Result<(), AppError> {
    let path = format!("/applications/{}/status", application_id);
    match api
        .put_optional::<_, serde_json::Value>(&path, &UpdateStatusRequest { status })
        .await
    {
        Ok(_) => {
            notifier.notify(Toast::success("Application status updated"));
            Ok(())
        }
        Err(e) => {
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

async fn list(api: &ApiClient, path: &str, notifier: &dyn Notifier) -> Vec<Application> {
    match api.get::<Vec<Application>>(path).await {
        Ok(applications) => applications,
        Err(e) => {
            tracing::error!("Failed to fetch {}: {:?}", path, e);
            notifier.notify(Toast::error("Failed to load applications"));
            Vec::new()
        }
    }
}

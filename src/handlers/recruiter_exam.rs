// src/handlers/recruiter_exam.rs

use crate::{
    client::ApiClient,
    error::AppError,
    models::assessment::{AssessmentSummary, CandidateResult, CreateAssessmentRequest},
    notify::{Notifier, Toast},
    routes::{Navigator, Route},
};

/// Creates a coding assessment from the recruiter's form.
pub async fn create_assessment(
    api: &ApiClient,
    payload: &CreateAssessmentRequest,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> Result<(), AppError> {
    if let Err(e) = payload.check() {
        notifier.notify(Toast::error(e.toast_message()));
        return Err(e);
    }

    match api
        .post_optional::<_, serde_json::Value>("/exam/recruiter/create", payload)
        .await
    {
        Ok(_) => {
            tracing::info!(
                "Assessment '{}' created with {} questions",
                payload.assessment_name,
                payload.questions.len()
            );
            notifier.notify(Toast::success("Assessment created successfully"));
            navigator.navigate(Route::RecruiterAssessments);
            Ok(())
        }
        Err(e) => {
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

pub async fn list_assessments(api: &ApiClient, notifier: &dyn Notifier) -> Vec<AssessmentSummary> {
    match api.get::<Vec<AssessmentSummary>>("/exam/recruiter/list").await {
        Ok(list) => list,
        Err(e) => {
            tracing::error!("Failed to fetch assessments: {:?}", e);
            notifier.notify(Toast::error("Failed to load assessments"));
            Vec::new()
        }
    }
}

/// Results table, highest score first.
pub async fn assessment_results(
    api: &ApiClient,
    assessment_id: &str,
    notifier: &dyn Notifier,
) -> Vec<CandidateResult> {
    let path = format!("/exam/recruiter/{}/results", assessment_id);
    match api.get::<Vec<CandidateResult>>(&path).await {
        Ok(mut results) => {
            results.sort_by(|a, b| b.total_score.cmp(&a.total_score));
            results
        }
        Err(e) => {
            tracing::error!("Failed to fetch results for {}: {:?}", assessment_id, e);
            notifier.notify(Toast::error("Failed to load results"));
            Vec::new()
        }
    }
}

// src/handlers/profile.rs

use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

use crate::{
    client::ApiClient,
    error::AppError,
    models::user::{RecruiterProfile, StudentProfile},
    notify::{Notifier, Toast},
};

/// Get current student's profile.
/// A failed fetch leaves the form blank rather than failing the page.
pub async fn get_student_profile(api: &ApiClient, notifier: &dyn Notifier) -> StudentProfile {
    fetch_or_default(api, "/student/profile", notifier).await
}

pub async fn update_student_profile(
    api: &ApiClient,
    profile: &StudentProfile,
    notifier: &dyn Notifier,
) -> Result<StudentProfile, AppError> {
    save(api, "/student/profile", profile, notifier).await
}

pub async fn get_recruiter_profile(api: &ApiClient, notifier: &dyn Notifier) -> RecruiterProfile {
    fetch_or_default(api, "/recruiter/profile", notifier).await
}

pub async fn update_recruiter_profile(
    api: &ApiClient,
    profile: &RecruiterProfile,
    notifier: &dyn Notifier,
) -> Result<RecruiterProfile, AppError> {
    save(api, "/recruiter/profile", profile, notifier).await
}

async fn fetch_or_default<T: DeserializeOwned + Default>(
    api: &ApiClient,
    path: &str,
    notifier: &dyn Notifier,
) -> T {
    match api.get(path).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Failed to fetch {}: {:?}", path, e);
            notifier.notify(Toast::error("Failed to load profile"));
            T::default()
        }
    }
}

async fn save<T: Serialize + Validate + DeserializeOwned + Clone>(
    api: &ApiClient,
    path: &str,
    profile: &T,
    notifier: &dyn Notifier,
) -> Result<T, AppError> {
    if let Err(validation_errors) = profile.validate() {
        let err = AppError::from(validation_errors);
        notifier.notify(Toast::error(err.toast_message()));
        return Err(err);
    }

    match api.put_optional::<_, T>(path, profile).await {
        Ok(saved) => {
            notifier.notify(Toast::success("Profile updated successfully"));
            // Some deployments echo the profile back, others only send a message.
            Ok(saved.unwrap_or_else(|| profile.clone()))
        }
        Err(e) => {
            tracing::error!("Failed to update {}: {:?}", path, e);
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

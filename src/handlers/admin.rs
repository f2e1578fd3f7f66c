// src/handlers/admin.rs

use validator::Validate;

use crate::{
    client::ApiClient,
    error::AppError,
    models::user::AdminCreateUserRequest,
    notify::{Notifier, Toast},
};

/// Creates a user with a specific role.
/// Admin only.
pub async fn create_user(
    api: &ApiClient,
    payload: &AdminCreateUserRequest,
    notifier: &dyn Notifier,
) -> Result<(), AppError> {
    if let Err(validation_errors) = payload.validate() {
        let err = AppError::from(validation_errors);
        notifier.notify(Toast::error(err.toast_message()));
        return Err(err);
    }

    match api
        .post_optional::<_, serde_json::Value>("/admin/create-user", payload)
        .await
    {
        Ok(_) => {
            tracing::info!("Created {} account for {}", payload.role, payload.email);
            notifier.notify(Toast::success(format!(
                "{} account created for {}",
                payload.role, payload.email
            )));
            Ok(())
        }
        Err(e) => {
            if matches!(e, AppError::Api { status: 409, .. }) {
                tracing::warn!("User {} already exists", payload.email);
            } else {
                tracing::error!("Failed to create user: {:?}", e);
            }
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

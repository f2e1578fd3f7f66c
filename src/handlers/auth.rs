// src/handlers/auth.rs

use validator::Validate;

use crate::{
    client::ApiClient,
    error::AppError,
    models::user::{LoginRequest, LoginResponse},
    notify::{Notifier, Toast},
    routes::{Navigator, Route, dashboard_for},
    session::{Session, SessionStore},
    utils::jwt::peek_claims,
};

/// Authenticates against `/auth/login` and stores the session.
///
/// `api` must be an anonymous client. The returned session only reaches
/// other requests once a fresh client is built from the store.
pub async fn login(
    api: &ApiClient,
    store: &mut SessionStore,
    payload: LoginRequest,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> Result<Session, AppError> {
    if let Err(validation_errors) = payload.validate() {
        let err = AppError::from(validation_errors);
        notifier.notify(Toast::error(err.toast_message()));
        return Err(err);
    }

    let response: LoginResponse = match api.post("/auth/login", &payload).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Login failed for {}: {}", payload.email, e);
            notifier.notify(Toast::error(match &e {
                AppError::Api { .. } => e.toast_message(),
                _ => "Login failed. Please try again.".to_string(),
            }));
            return Err(e);
        }
    };

    let claims = peek_claims(&response.token).ok();
    let role = response
        .role
        .or_else(|| claims.as_ref().and_then(|c| c.role()))
        .ok_or_else(|| AppError::Unauthorized("Login response did not include a role".to_string()))?;

    let session = Session {
        user_id: response
            .user_id_string()
            .or_else(|| claims.and_then(|c| c.sub)),
        token: Some(response.token),
        role: Some(role),
        username: response.username.or(Some(payload.email)),
    };
    store.save(session.clone())?;

    tracing::info!("Logged in as {} ({})", session.username.as_deref().unwrap_or("?"), role);
    notifier.notify(Toast::success("Login successful"));
    navigator.navigate(dashboard_for(role));
    Ok(session)
}

/// Clears the stored session and returns to the login page.
pub fn logout(
    store: &mut SessionStore,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> Result<(), AppError> {
    store.clear()?;
    notifier.notify(Toast::info("Logged out"));
    navigator.navigate(Route::Login);
    Ok(())
}

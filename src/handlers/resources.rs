// src/handlers/resources.rs

use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use validator::Validate;

use crate::{
    client::ApiClient,
    error::AppError,
    models::resource::{Resource, ResourceUpload},
    notify::{Notifier, Toast},
};

pub async fn list_resources(api: &ApiClient, notifier: &dyn Notifier) -> Vec<Resource> {
    match api.get::<Vec<Resource>>("/resources/all").await {
        Ok(resources) => resources,
        Err(e) => {
            tracing::error!("Failed to fetch resources: {:?}", e);
            notifier.notify(Toast::error("Failed to load resources"));
            Vec::new()
        }
    }
}

/// Uploads a resource as `multipart/form-data`: the metadata as a JSON part
/// named `resource`, each file as a binary part named `files`.
pub async fn upload_resource(
    api: &ApiClient,
    meta: &ResourceUpload,
    files: &[PathBuf],
    notifier: &dyn Notifier,
) -> Result<Resource, AppError> {
    if let Err(validation_errors) = meta.validate() {
        let err = AppError::from(validation_errors);
        notifier.notify(Toast::error(err.toast_message()));
        return Err(err);
    }

    let form = match build_form(meta, files).await {
        Ok(form) => form,
        Err(e) => {
            notifier.notify(Toast::error(e.toast_message()));
            return Err(e);
        }
    };

    match api.post_multipart::<Resource>("/resources/upload", form).await {
        Ok(resource) => {
            tracing::info!("Uploaded resource {} with {} files", resource.id, files.len());
            notifier.notify(Toast::success("Resource uploaded successfully"));
            Ok(resource)
        }
        Err(e) => {
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

pub async fn delete_resource(api: &ApiClient, id: &str, notifier: &dyn Notifier) -> Result<(), AppError> {
    match api.delete(&format!("/resources/{}", id)).await {
        Ok(()) => {
            notifier.notify(Toast::success("Resource deleted"));
            Ok(())
        }
        Err(e) => {
            notifier.notify(Toast::error(e.toast_message()));
            Err(e)
        }
    }
}

async fn build_form(meta: &ResourceUpload, files: &[PathBuf]) -> Result<Form, AppError> {
    let json = serde_json::to_vec(meta)?;
    let resource_part = Part::bytes(json)
        .file_name("resource.json")
        .mime_str("application/json")?;
    let mut form = Form::new().part("resource", resource_part);

    for path in files {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".to_string());
        form = form.part("files", Part::bytes(bytes).file_name(name));
    }
    Ok(form)
}

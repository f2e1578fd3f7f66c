// src/models/resource.rs

use serde::{Deserialize, Serialize};
use validator::Validate;
use url::Url;

use super::string_or_number;

/// Study material shared by TPOs and recruiters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, alias = "file_urls", alias = "files")]
    pub file_urls: Vec<String>,
}

/// JSON part of the multipart upload. Files travel as separate binary parts.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUpload {
    #[validate(length(min = 1, max = 200, message = "Title is required."))]
    pub title: String,
    #[validate(length(max = 5000))]
    pub description: String,
    pub category: Option<String>,
    #[validate(custom(function = validate_optional_link))]
    pub link: Option<String>,
}

/// Links must be absolute URLs when given.
fn validate_optional_link(link: &str) -> Result<(), validator::ValidationError> {
    if Url::parse(link).is_err() {
        return Err(validator::ValidationError::new("invalid_url"));
    }
    Ok(())
}

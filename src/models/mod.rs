// src/models/mod.rs

pub mod application;
pub mod assessment;
pub mod exam;
pub mod execution;
pub mod job;
pub mod question;
pub mod resource;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Ids come back as JSON numbers from some endpoints and strings from others.
/// Both are normalized to `String`.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Int(n) => n.to_string(),
    })
}

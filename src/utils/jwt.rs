// src/utils/jwt.rs

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, models::user::Role};

/// JWT Claims structure, as far as the client cares.
/// Every field is optional: the token is issued by a backend we don't control.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Claims {
    /// Subject - usually the user id.
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Expiration time as Unix timestamp.
    #[serde(default)]
    pub exp: Option<u64>,
}

impl Claims {
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|r| r.parse().ok())
    }

    pub fn is_expired_at(&self, unix_secs: u64) -> bool {
        matches!(self.exp, Some(exp) if exp <= unix_secs)
    }

    pub fn is_expired(&self) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.is_expired_at(now)
    }
}

/// Decodes the claims of a bearer token WITHOUT checking its signature.
///
/// The client has no secret; the backend stays the authority. The claims
/// are only used to pick a dashboard and to notice an expired session
/// before a request bounces with 401.
pub fn peek_claims(token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(token_data.claims)
}

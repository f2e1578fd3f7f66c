// src/models/user.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// The four portal roles. Each has its own dashboard and guarded pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Recruiter,
    #[serde(alias = "TPO", alias = "placement_officer")]
    Tpo,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Recruiter => "recruiter",
            Role::Tpo => "tpo",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "recruiter" => Ok(Role::Recruiter),
            "tpo" | "placement_officer" => Ok(Role::Tpo),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// DTO for user login.
#[derive(Debug, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 1, max = 128, message = "Password is required."))]
    pub password: String,
}

/// Login response. The backend is inconsistent about casing, so both
/// `userId` and `user_id` (and a bare `id`) are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(alias = "user_id", alias = "id")]
    pub user_id: Option<serde_json::Value>,
    pub role: Option<Role>,
    #[serde(alias = "name")]
    pub username: Option<String>,
}

impl LoginResponse {
    /// User ids arrive as numbers or strings depending on the endpoint.
    pub fn user_id_string(&self) -> Option<String> {
        match self.user_id.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[validate(length(min = 1, max = 100, message = "Full name is required."))]
    #[serde(alias = "full_name", alias = "name")]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default, alias = "roll_number")]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0 and 10."))]
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(default, alias = "graduation_year")]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, alias = "resume_url")]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterProfile {
    #[validate(length(min = 1, max = 100, message = "Name is required."))]
    #[serde(alias = "full_name")]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "Company name is required."))]
    #[serde(alias = "company_name", alias = "company")]
    pub company_name: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default, alias = "company_website")]
    pub company_website: Option<String>,
}

/// DTO for admin creating a user with a specific role.
#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateUserRequest {
    #[validate(length(min = 3, max = 50, message = "Name length must be between 3 and 50 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 6, max = 128, message = "Password must be at least 6 characters."))]
    pub password: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accepts_numeric_and_snake_case_ids() {
        let a: LoginResponse =
            serde_json::from_str(r#"{"token":"t","userId":42,"role":"student"}"#).unwrap();
        assert_eq!(a.user_id_string().as_deref(), Some("42"));
        assert_eq!(a.role, Some(Role::Student));

        let b: LoginResponse =
            serde_json::from_str(r#"{"token":"t","user_id":"u-7","role":"TPO"}"#).unwrap();
        assert_eq!(b.user_id_string().as_deref(), Some("u-7"));
        assert_eq!(b.role, Some(Role::Tpo));
    }

    #[test]
    fn recruiter_profile_reconciles_company_name_casing() {
        let camel: RecruiterProfile = serde_json::from_str(
            r#"{"name":"R","email":"r@acme.io","companyName":"Acme"}"#,
        )
        .unwrap();
        let snake: RecruiterProfile = serde_json::from_str(
            r#"{"name":"R","email":"r@acme.io","company_name":"Acme"}"#,
        )
        .unwrap();
        assert_eq!(camel.company_name, "Acme");
        assert_eq!(snake.company_name, "Acme");
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Recruiter".parse::<Role>(), Ok(Role::Recruiter));
        assert!("guest".parse::<Role>().is_err());
    }
}

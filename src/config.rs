// src/config.rs

use std::{env, path::PathBuf, time::Duration};

use dotenvy::dotenv;
use url::Url;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme and host of the backend, e.g. `http://localhost`.
    pub backend_host: String,
    pub backend_port: u16,
    pub rust_log: String,
    /// Where the session (token, user id, role) is persisted between runs.
    pub session_file: PathBuf,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let backend_host = env::var("BACKEND_HOST")
            .unwrap_or_else(|_| "http://localhost".to_string());

        let backend_port = env::var("BACKEND_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let session_file = env::var("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".careernexus/session.json"));

        let request_timeout = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Self {
            backend_host,
            backend_port,
            rust_log,
            session_file,
            request_timeout,
        }
    }

    /// Builds the REST base, `{host}:{port}/api`.
    pub fn api_base(&self) -> Result<Url, AppError> {
        let host = self.backend_host.trim_end_matches('/');
        let mut url = Url::parse(host)?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(AppError::Config(format!(
                "BACKEND_HOST '{}' is not an http(s) URL",
                self.backend_host
            )));
        }
        url.set_port(Some(self.backend_port))
            .map_err(|_| AppError::Config(format!("cannot set port on '{}'", host)))?;
        url.set_path("/api");
        Ok(url)
    }
}

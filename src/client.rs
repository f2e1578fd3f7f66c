// src/client.rs

use async_trait::async_trait;
use reqwest::{
    Method, RequestBuilder, Response,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
    multipart,
};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::{
    config::Config,
    error::{AppError, extract_error_message},
    models::execution::{ExecutionResult, RunRequest},
    session::SessionStore,
};

/// Shared REST client for every page.
///
/// The bearer token is read from the session ONCE, here, and baked into the
/// default headers. A login or logout only reaches requests after a new
/// client is built.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &Config, session: &SessionStore) -> Result<Self, AppError> {
        Self::with_base(config.api_base()?, session.token(), config.request_timeout)
    }

    pub fn with_base(
        base: Url,
        token: Option<&str>,
        timeout: std::time::Duration,
    ) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| AppError::Config(format!("invalid token header: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `path` is relative to `/api`, with or without a leading slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// POST for endpoints whose success body is informational. Any 2xx is
    /// a success; an empty or non-JSON body comes back as `None`.
    pub async fn post_optional<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, AppError> {
        self.send_optional(self.request(Method::POST, path).json(body))
            .await
    }

    /// PUT with the same body handling as [`ApiClient::post_optional`].
    pub async fn put_optional<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, AppError> {
        self.send_optional(self.request(Method::PUT, path).json(body))
            .await
    }

    /// DELETE; the response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::check(response).await.map(|_| ())
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<T, AppError> {
        self.send(self.request(Method::POST, path).multipart(form)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let bytes = Self::body(builder).await?;
        // Some endpoints answer 200 with an empty body.
        if bytes.is_empty() {
            return serde_json::from_slice(b"null").map_err(Into::into);
        }
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    async fn send_optional<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>, AppError> {
        let bytes = Self::body(builder).await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("ignoring {} byte response body: {}", bytes.len(), e);
                Ok(None)
            }
        }
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn body(builder: RequestBuilder) -> Result<Vec<u8>, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("request failed: {:?}", e);
            AppError::from(e)
        })?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Turns non-2xx statuses into `AppError::Api` carrying the backend message.
    async fn check(response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let fallback = status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body, &fallback);
        tracing::warn!("backend returned {}: {}", status, message);
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Seam between the editor and the remote execution service.
#[async_trait]
pub trait CodeRunner: Send + Sync {
    async fn run(&self, request: &RunRequest) -> Result<ExecutionResult, AppError>;
}

#[async_trait]
impl CodeRunner for ApiClient {
    async fn run(&self, request: &RunRequest) -> Result<ExecutionResult, AppError> {
        self.post("/code/run", request).await
    }
}

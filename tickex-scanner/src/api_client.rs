//! HTTP client for the verification endpoint.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde_json::Value;
use tickex_core::{TicketVerifier, VerifyError};
use tickex_model::{VerifyRequest, VerifyResponse};
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// Token and cookie pair for the server's double-submit CSRF check.
#[derive(Debug, Clone)]
struct CsrfSession {
    token: String,
    cookie: String,
}

/// API client with CSRF support.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    csrf: Arc<RwLock<Option<CsrfSession>>>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// No request timeout is configured: the verification call carries
    /// none by contract. A failed call is reported, never retried.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url).context("invalid server URL")?;

        let client = Client::builder()
            .build()
            .context("failed to create HTTP client")?;

        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf: Arc::new(RwLock::new(None)),
        })
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch the CSRF token and cookie once, then reuse them for the
    /// lifetime of the client.
    async fn ensure_csrf(&self) -> std::result::Result<CsrfSession, VerifyError> {
        if let Some(session) = self.csrf.read().await.as_ref() {
            return Ok(session.clone());
        }

        let response = self
            .client
            .get(self.build_url("/api/csrf"))
            .send()
            .await
            .map_err(transport)?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::to_string)
            .ok_or_else(|| {
                VerifyError::Rejected("csrf endpoint set no cookie".to_string())
            })?;

        let body: Value = response.json().await.map_err(transport)?;
        let token = body["token"]
            .as_str()
            .ok_or_else(|| {
                VerifyError::Rejected(
                    "csrf endpoint returned no token".to_string(),
                )
            })?
            .to_string();

        debug!("csrf token acquired");
        let session = CsrfSession { token, cookie };
        *self.csrf.write().await = Some(session.clone());
        Ok(session)
    }
}

fn transport(err: reqwest::Error) -> VerifyError {
    VerifyError::Transport(err.to_string())
}

#[async_trait]
impl TicketVerifier for ApiClient {
    async fn verify(
        &self,
        payload: &str,
    ) -> std::result::Result<VerifyResponse, VerifyError> {
        let csrf = self.ensure_csrf().await?;

        let response = self
            .client
            .post(self.build_url("/api/verify"))
            .header(CSRF_HEADER, &csrf.token)
            .header(header::COOKIE, &csrf.cookie)
            .json(&VerifyRequest::new(payload))
            .send()
            .await
            .map_err(transport)?;

        match response.status() {
            StatusCode::OK => response.json().await.map_err(transport),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                Err(VerifyError::Rejected(format!(
                    "request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_normalizes_slashes() {
        let client = ApiClient::new("http://127.0.0.1:3000/").unwrap();
        assert_eq!(
            client.build_url("/api/verify"),
            "http://127.0.0.1:3000/api/verify"
        );
        assert_eq!(
            client.build_url("api/csrf"),
            "http://127.0.0.1:3000/api/csrf"
        );
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        assert!(ApiClient::new("not a url").is_err());
    }
}

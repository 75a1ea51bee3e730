//! reqwest-backed implementation of [`SalesApi`].

use super::SalesApi;
use crate::types::{
    AnalyzeRequest, AnalyzeResponse, ApiError, AuthResponse, ChatRequest, ChatResponse, Endpoint,
    ForgotPasswordRequest, LoginRequest, RegisterRequest, Result,
};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for the Wingman backend.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// Creates a client for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wingman/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` as JSON and returns the raw body of a 2xx response.
    async fn post<B>(&self, endpoint: Endpoint, body: &B, token: Option<&str>) -> Result<String>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = endpoint.url(&self.base_url);
        let mut req = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body);

        if endpoint.requires_auth() {
            if let Some(t) = token {
                req = req.header(AUTHORIZATION, format!("Bearer {}", t));
            }
        }

        tracing::debug!(%url, "POST");
        let resp = req.send().await.map_err(|e| {
            tracing::warn!(%url, "Request failed: {}", e);
            ApiError::Network(e.to_string())
        })?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "Backend returned an error");
            return Err(ApiError::from_response(endpoint, status.as_u16(), &text));
        }
        Ok(text)
    }

    async fn post_json<B, R>(&self, endpoint: Endpoint, body: &B, token: Option<&str>) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let text = self.post(endpoint, body, token).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SalesApi for HttpApiClient {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse> {
        self.post_json(Endpoint::Login, req, None).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse> {
        self.post_json(Endpoint::Register, req, None).await
    }

    async fn forgot_password(&self, req: &ForgotPasswordRequest) -> Result<()> {
        self.post(Endpoint::ForgotPassword, req, None).await.map(|_| ())
    }

    async fn analyze_market(
        &self,
        req: &AnalyzeRequest,
        token: Option<&str>,
    ) -> Result<AnalyzeResponse> {
        self.post_json(Endpoint::AnalyzeMarket, req, token).await
    }

    async fn chat(&self, req: &ChatRequest, token: Option<&str>) -> Result<ChatResponse> {
        self.post_json(Endpoint::Chat, req, token).await
    }
}

//! Browser transport for the Wingman backend
//!
//! Mirrors the native client: JSON bodies, `Authorization: Bearer` on the
//! protected endpoints, and backend errors decoded into [`ApiError`].

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wingman::types::{
    AnalyzeRequest, AnalyzeResponse, AuthResponse, ChatRequest, ChatResponse, Endpoint,
    ForgotPasswordRequest, LoginRequest, RegisterRequest,
};
use wingman::{ApiError, Result};

/// POSTs `body` and returns the raw body of a successful response.
async fn post<T: Serialize>(
    base_url: &str,
    endpoint: Endpoint,
    body: &T,
    token: Option<&str>,
) -> Result<String> {
    let mut req = Request::post(&endpoint.url(base_url));
    if endpoint.requires_auth() {
        if let Some(t) = token {
            req = req.header("Authorization", &format!("Bearer {}", t));
        }
    }

    let req = req
        .json(body)
        .map_err(|e| ApiError::Validation(format!("Failed to serialize request: {}", e)))?;

    let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        tracing::warn!(endpoint = endpoint.path(), status, "Request rejected");
        return Err(ApiError::from_response(endpoint, status, &text));
    }
    Ok(text)
}

async fn post_json<T: Serialize, R: DeserializeOwned>(
    base_url: &str,
    endpoint: Endpoint,
    body: &T,
    token: Option<&str>,
) -> Result<R> {
    let text = post(base_url, endpoint, body, token).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn login(base_url: &str, req: &LoginRequest) -> Result<AuthResponse> {
    post_json(base_url, Endpoint::Login, req, None).await
}

pub async fn register(base_url: &str, req: &RegisterRequest) -> Result<AuthResponse> {
    post_json(base_url, Endpoint::Register, req, None).await
}

/// The response body is ignored.
pub async fn forgot_password(base_url: &str, req: &ForgotPasswordRequest) -> Result<()> {
    post(base_url, Endpoint::ForgotPassword, req, None).await.map(|_| ())
}

pub async fn analyze_market(
    base_url: &str,
    req: &AnalyzeRequest,
    token: Option<&str>,
) -> Result<AnalyzeResponse> {
    post_json(base_url, Endpoint::AnalyzeMarket, req, token).await
}

pub async fn chat(base_url: &str, req: &ChatRequest, token: Option<&str>) -> Result<ChatResponse> {
    post_json(base_url, Endpoint::Chat, req, token).await
}

//! Backend API client
//!
//! The Wingman backend exposes five JSON endpoints:
//!
//! - `POST /login` - Exchange credentials for a token and company profile
//! - `POST /register` - Create an account; same response as login
//! - `POST /forgot-password` - Request password reset instructions
//! - `POST /analyze-market` - Run the selected analyses for a prospect
//! - `POST /chat` - Ask the assistant a question, with results as context
//!
//! Non-2xx responses carry `{"detail": ...}`, which becomes the
//! user-visible error. There are no retries.

pub mod client;

pub use client::HttpApiClient;

use crate::types::{
    AnalyzeRequest, AnalyzeResponse, AuthResponse, ChatRequest, ChatResponse, ForgotPasswordRequest,
    LoginRequest, RegisterRequest, Result,
};
use async_trait::async_trait;

/// Calls the backend makes available to the client.
///
/// `token` is the raw session token; implementations send it as a bearer
/// credential when present.
#[async_trait]
pub trait SalesApi: Send + Sync {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse>;

    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse>;

    /// Succeeds on any 2xx; the body is ignored.
    async fn forgot_password(&self, req: &ForgotPasswordRequest) -> Result<()>;

    async fn analyze_market(
        &self,
        req: &AnalyzeRequest,
        token: Option<&str>,
    ) -> Result<AnalyzeResponse>;

    async fn chat(&self, req: &ChatRequest, token: Option<&str>) -> Result<ChatResponse>;
}

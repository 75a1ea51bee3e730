//! Mock backend for testing.
//!
//! [`MockSalesApi`] answers every endpoint from canned values and records the
//! token each protected call carried, so flows can be exercised without a
//! server.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use wingman::types::{
    AnalyzeRequest, AnalyzeResponse, AuthResponse, ChatRequest, ChatResponse, ForgotPasswordRequest,
    LoginRequest, RegisterRequest,
};
use wingman::{ApiError, Result, SalesApi};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub endpoint: &'static str,
    pub token: Option<String>,
}

/// Mock backend with configurable responses.
///
/// # Examples
///
/// ```ignore
/// let api = MockSalesApi::new().with_analyses([("Persona", "B")]);
/// let api = MockSalesApi::failing(ApiError::Network("refused".into()));
/// ```
#[derive(Clone, Default)]
pub struct MockSalesApi {
    analyses: BTreeMap<String, String>,
    reply: String,
    failure: Option<ApiError>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockSalesApi {
    pub fn new() -> Self {
        Self {
            reply: "Hello".to_string(),
            ..Default::default()
        }
    }

    /// Every call fails with `error`.
    pub fn failing(error: ApiError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub fn with_analyses<'a>(
        mut self,
        analyses: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        self.analyses = analyses
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, endpoint: &'static str, token: Option<&str>) -> Result<()> {
        self.calls.lock().push(Call {
            endpoint,
            token: token.map(str::to_string),
        });
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn auth_response(&self) -> AuthResponse {
        AuthResponse {
            access_token: "tok-123".into(),
            user_id: "42".into(),
            company_website: Some("https://acme.io".into()),
            company_description: Some("Anvils and rockets".into()),
        }
    }
}

#[async_trait]
impl SalesApi for MockSalesApi {
    async fn login(&self, _req: &LoginRequest) -> Result<AuthResponse> {
        self.record("/login", None)?;
        Ok(self.auth_response())
    }

    async fn register(&self, _req: &RegisterRequest) -> Result<AuthResponse> {
        self.record("/register", None)?;
        Ok(self.auth_response())
    }

    async fn forgot_password(&self, _req: &ForgotPasswordRequest) -> Result<()> {
        self.record("/forgot-password", None)
    }

    async fn analyze_market(
        &self,
        _req: &AnalyzeRequest,
        token: Option<&str>,
    ) -> Result<AnalyzeResponse> {
        self.record("/analyze-market", token)?;
        Ok(AnalyzeResponse {
            analyses: self.analyses.clone(),
        })
    }

    async fn chat(&self, _req: &ChatRequest, token: Option<&str>) -> Result<ChatResponse> {
        self.record("/chat", token)?;
        Ok(ChatResponse {
            response: self.reply.clone(),
        })
    }
}

use crate::analysis::{AnalysisKind, AnalysisResults};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

// ============= Endpoints =============

/// Backend endpoints the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    ForgotPassword,
    AnalyzeMarket,
    Chat,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Login => "/login",
            Endpoint::Register => "/register",
            Endpoint::ForgotPassword => "/forgot-password",
            Endpoint::AnalyzeMarket => "/analyze-market",
            Endpoint::Chat => "/chat",
        }
    }

    /// Message shown when the backend fails without a usable `detail`.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::Login => "Login failed",
            Endpoint::Register => "Registration failed",
            Endpoint::ForgotPassword => "Password reset failed",
            Endpoint::AnalyzeMarket => "Analysis failed",
            Endpoint::Chat => "Chat failed",
        }
    }

    /// Whether the session token is sent along with the request.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Endpoint::AnalyzeMarket | Endpoint::Chat)
    }

    /// Joins the endpoint path onto a base URL, tolerating a trailing slash.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

// ============= Authentication Types =============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration body. Field names follow the backend's lowercase spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub companyurl: String,
    pub companydescription: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Successful login/registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(deserialize_with = "opaque_id")]
    pub user_id: String,
    #[serde(default)]
    pub company_website: Option<String>,
    #[serde(default)]
    pub company_description: Option<String>,
}

/// User ids come back as either strings or integers depending on the backend
/// build; both are kept as opaque strings.
fn opaque_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

// ============= Analysis Types =============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub company_website: String,
    pub company_description: String,
    pub competitor_website: String,
    pub prospect_url: String,
    pub prospect_job_title: String,
    pub selected_analyses: Vec<AnalysisKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub analyses: BTreeMap<String, String>,
}

// ============= Chat Types =============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: AnalysisResults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

// ============= Error Types =============

/// Error body returned by the backend on non-2xx responses.
///
/// `detail` is usually a string, but validation failures carry a list of
/// `{loc, msg, type}` objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Flattens `detail` into one displayable line, if it carries any text.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

/// Failure of a single client flow.
///
/// `Display` is the user-visible message for the flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// A 2xx response whose body could not be read.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Rejected before anything was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Builds the error for a non-2xx response from its raw body.
    pub fn from_response(endpoint: Endpoint, status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message())
            .unwrap_or_else(|| endpoint.failure_message().to_string());
        ApiError::Server { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

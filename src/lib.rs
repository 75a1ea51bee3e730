//! # Wingman AI client
//!
//! Client side of the Wingman sales-intelligence assistant: sign in, describe
//! your company and a prospect, run canned market analyses on the backend and
//! chat with an assistant seeded by the results.
//!
//! ## Overview
//!
//! The crate is used in two ways:
//!
//! 1. **As a terminal client** - Run the `wingman` binary (feature `cli`)
//! 2. **As a library** - The Leptos front end in `ui/` builds on it with
//!    `default-features = false` and brings its own HTTP transport
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wingman::{
//!     api::HttpApiClient, auth::LoginForm, session::{FileStorage, SessionStore},
//!     AnalysisKind, WingmanApp,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(SessionStore::restore(FileStorage::new(".wingman")));
//!     let api = HttpApiClient::new("http://localhost:8000", std::time::Duration::from_secs(60))?;
//!     let app = WingmanApp::new(api, store);
//!
//!     app.login(&LoginForm::new("ada@acme.io", "Secret123")).await?;
//!
//!     let mut dashboard = app.open_dashboard().expect("signed in");
//!     dashboard.form.prospect_url = "https://roadrunner.com".into();
//!     dashboard.form.prospect_job_title = "CTO".into();
//!     dashboard.select(AnalysisKind::InitialAnalysis);
//!     app.analyze(&mut dashboard).await;
//!
//!     for (label, body) in dashboard.results().cards() {
//!         println!("{label}\n{body}\n");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `client` | reqwest-based [`api::HttpApiClient`] and the async [`WingmanApp`] driver (default) |
//! | `cli` | The `wingman` terminal front end (default) |
//!
//! ## Modules
//!
//! - [`session`] - Session store and its persistence backends
//! - [`routes`] - Route table and route guard
//! - [`auth`] - Login, registration and password-reset forms
//! - [`dashboard`] - Analysis form, results and chat state
//! - [`analysis`] - Analysis labels and result mapping
//! - [`types`] - Wire types and errors

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Analysis labels and the results returned for them.
pub mod analysis;
/// Login, registration and password-reset forms.
pub mod auth;
/// Dashboard state: analysis form, results, chat.
pub mod dashboard;
/// Route table and route guard.
pub mod routes;
/// Session store and persistence backends.
pub mod session;
/// Wire types and errors.
pub mod types;

/// Backend API client.
#[cfg(feature = "client")]
pub mod api;
/// Async driver for the client flows.
#[cfg(feature = "client")]
pub mod app;
/// Terminal front end.
#[cfg(feature = "cli")]
pub mod cli;
/// Configuration utilities.
#[cfg(feature = "cli")]
pub mod utils;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

// Re-export commonly used types
pub use analysis::{AnalysisKind, AnalysisResults};
pub use dashboard::{ChatEntry, Dashboard, Tab};
pub use routes::{Navigation, Route, RouteGuard};
pub use session::{Credentials, Session, SessionStore};
pub use types::{ApiError, Result};

#[cfg(feature = "client")]
pub use api::{HttpApiClient, SalesApi};
#[cfg(feature = "client")]
pub use app::WingmanApp;

//! End-to-end flow tests against a mocked Wingman backend.
//!
//! These tests use wiremock to stand in for the backend and validate:
//! - Login / registration populating the session store
//! - Error details surfacing unchanged
//! - Analysis results and tab switching
//! - Chat replies and the fallback entry on failure

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wingman::auth::{ForgotPasswordForm, LoginForm, RegisterForm, RESET_INSTRUCTIONS_SENT};
use wingman::dashboard::{AnalysisOutcome, Tab, CHAT_FALLBACK, NO_RESULTS_MESSAGE};
use wingman::session::{MemoryStorage, SessionStorage, STORAGE_KEY};
use wingman::{
    AnalysisKind, Credentials, HttpApiClient, Navigation, Route, Session, SessionStore, WingmanApp,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

fn app_for(base_url: &str) -> WingmanApp<HttpApiClient> {
    let api = HttpApiClient::new(base_url, Duration::from_secs(5)).expect("client");
    WingmanApp::new(api, Arc::new(SessionStore::in_memory()))
}

fn auth_body() -> serde_json::Value {
    json!({
        "access_token": "tok-123",
        "user_id": "42",
        "company_website": "https://acme.io",
        "company_description": "Anvils and rockets"
    })
}

fn credentials() -> Credentials {
    Credentials {
        token: "tok-123".into(),
        user_id: "42".into(),
        conversation_id: "conv-1".into(),
        company_name: "https://acme.io".into(),
        company_description: "Anvils and rockets".into(),
    }
}

/// Base URL of a server that has already shut down.
async fn dead_base_url() -> String {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);
    uri
}

// ============= Login / Register =============

#[tokio::test]
async fn test_login_populates_session_and_admits_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"email": "ada@acme.io", "password": "Secret123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body()))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    assert!(app.navigate(Route::Dashboard).is_redirect());

    let nav = app
        .login(&LoginForm::new("ada@acme.io", "Secret123"))
        .await
        .unwrap();
    assert_eq!(nav, Navigation::Render(Route::Dashboard));

    let session = app.session();
    assert_eq!(session.token(), Some("tok-123"));
    assert_eq!(session.user_id(), Some("42"));
    assert_eq!(session.company_name(), Some("https://acme.io"));
    assert_eq!(session.company_description(), Some("Anvils and rockets"));
    let conversation = session.conversation_id().unwrap();
    assert!(uuid::Uuid::parse_str(conversation).is_ok());

    assert_eq!(app.navigate(Route::Dashboard), Navigation::Render(Route::Dashboard));
}

#[tokio::test]
async fn test_register_sends_backend_field_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "username": "ada",
            "companyurl": "https://acme.io",
            "companydescription": "Anvils and rockets",
            "email": "ada@acme.io",
            "password": "Secret123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(auth_body()))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    let form = RegisterForm {
        username: "ada".into(),
        company_url: "https://acme.io".into(),
        company_description: "Anvils and rockets".into(),
        email: "ada@acme.io".into(),
        password: "Secret123".into(),
        confirm_password: "Secret123".into(),
    };

    let nav = app.register(&form).await.unwrap();
    assert_eq!(nav, Navigation::Render(Route::Dashboard));
    assert_eq!(app.session().token(), Some("tok-123"));
}

#[tokio::test]
async fn test_register_password_mismatch_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body()))
        .expect(0)
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    let form = RegisterForm {
        username: "ada".into(),
        company_url: "https://acme.io".into(),
        company_description: "Anvils".into(),
        email: "ada@acme.io".into(),
        password: "Secret123".into(),
        confirm_password: "Secret321".into(),
    };

    let err = app.register(&form).await.unwrap_err();
    assert_eq!(err.to_string(), "Passwords do not match");
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn test_login_rejection_leaves_session_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let app = app_for(&server.uri());

    let err = app.login(&LoginForm::new("ada@acme.io", "wrong")).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.status(), Some(400));
    assert_eq!(app.session(), Session::anonymous());

    // A rejected attempt does not disturb an existing session either.
    app.store().set_auth(credentials());
    let before = app.session();
    app.login(&LoginForm::new("ada@acme.io", "wrong")).await.unwrap_err();
    assert_eq!(app.session(), before);
}

#[tokio::test]
async fn test_login_without_detail_uses_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    let err = app.login(&LoginForm::new("ada@acme.io", "pw")).await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
}

#[tokio::test]
async fn test_login_network_failure_is_reported() {
    let app = app_for(&dead_base_url().await);
    let err = app.login(&LoginForm::new("ada@acme.io", "pw")).await.unwrap_err();
    assert!(err.to_string().starts_with("Network error"), "got: {}", err);
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn test_logout_redirects_protected_routes() {
    let app = app_for("http://127.0.0.1:9");
    app.store().set_auth(credentials());
    assert_eq!(app.navigate(Route::Dashboard), Navigation::Render(Route::Dashboard));

    let nav = app.logout();
    assert_eq!(nav, Navigation::Render(Route::Login));
    assert_eq!(app.navigate(Route::Dashboard), Navigation::Redirect(Route::Login));
    assert!(app.open_dashboard().is_err());
}

// ============= Password reset =============

#[tokio::test]
async fn test_forgot_password_success_and_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/forgot-password"))
        .and(body_json(json!({"email": "ada@acme.io"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "sent"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/forgot-password"))
        .and(body_json(json!({"email": "nobody@acme.io"})))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "User not found"})),
        )
        .mount(&server)
        .await;

    let app = app_for(&server.uri());

    let message = app
        .forgot_password(&ForgotPasswordForm::new("ada@acme.io"))
        .await
        .unwrap();
    assert_eq!(message, RESET_INSTRUCTIONS_SENT);

    let err = app
        .forgot_password(&ForgotPasswordForm::new("nobody@acme.io"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Password reset failed");
}

// ============= Analysis =============

#[tokio::test]
async fn test_analysis_shows_two_cards_and_switches_to_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze-market"))
        .and(header("authorization", "Bearer tok-123"))
        .and(body_json(json!({
            "companyWebsite": "https://acme.io",
            "companyDescription": "Anvils and rockets",
            "competitorWebsite": "",
            "prospectUrl": "https://roadrunner.com",
            "prospectJobTitle": "CTO",
            "selectedAnalyses": ["Initial Analysis", "Persona"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analyses": {"Initial Analysis": "A", "Persona": "B"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    app.store().set_auth(credentials());

    let mut dashboard = app.open_dashboard().unwrap();
    dashboard.form.prospect_url = "https://roadrunner.com".into();
    dashboard.form.prospect_job_title = "CTO".into();
    dashboard.set_selected([AnalysisKind::Persona, AnalysisKind::InitialAnalysis]);

    let outcome = app.analyze(&mut dashboard).await;

    assert_eq!(outcome, AnalysisOutcome::Applied);
    assert_eq!(dashboard.active_tab(), Tab::Results);
    assert_eq!(
        dashboard.results().cards(),
        vec![("Initial Analysis", "A"), ("Persona", "B")]
    );
    assert!(!dashboard.is_loading());
}

#[tokio::test]
async fn test_analysis_failure_keeps_previous_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze-market"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analyses": {"Persona": "B"}
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/analyze-market"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"detail": "Model overloaded"})),
        )
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    app.store().set_auth(credentials());
    let mut dashboard = app.open_dashboard().unwrap();
    dashboard.select(AnalysisKind::Persona);

    assert_eq!(app.analyze(&mut dashboard).await, AnalysisOutcome::Applied);
    dashboard.select_tab(Tab::Analysis);

    let outcome = app.analyze(&mut dashboard).await;
    assert_eq!(outcome, AnalysisOutcome::Failed("Model overloaded".into()));
    assert_eq!(dashboard.error(), Some("Model overloaded"));
    assert_eq!(dashboard.results().get("Persona"), Some("B"));
    assert_eq!(dashboard.active_tab(), Tab::Analysis);
}

#[tokio::test]
async fn test_analysis_with_only_unrequested_labels_stays_on_analysis() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze-market"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analyses": {"Latest News": "N"}
        })))
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    app.store().set_auth(credentials());
    let mut dashboard = app.open_dashboard().unwrap();
    dashboard.select(AnalysisKind::Persona);

    let outcome = app.analyze(&mut dashboard).await;
    assert_eq!(outcome, AnalysisOutcome::Failed(NO_RESULTS_MESSAGE.into()));
    assert_eq!(dashboard.active_tab(), Tab::Analysis);
    assert!(!dashboard.is_tab_enabled(Tab::Results));
}

#[tokio::test]
async fn test_restored_prefixed_token_sends_single_scheme() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze-market"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analyses": {"Persona": "B"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let entry = json!({
        "state": {
            "token": "Bearer abc",
            "userId": "42",
            "conversationId": "conv-1",
            "companyName": "https://acme.io",
            "companyDescription": "Anvils and rockets"
        },
        "version": 0
    });
    storage.write(STORAGE_KEY, &entry.to_string()).unwrap();

    let api = HttpApiClient::new(&server.uri(), Duration::from_secs(5)).expect("client");
    let app = WingmanApp::new(api, Arc::new(SessionStore::restore(storage)));
    let mut dashboard = app.open_dashboard().unwrap();
    dashboard.select(AnalysisKind::Persona);

    assert_eq!(app.analyze(&mut dashboard).await, AnalysisOutcome::Applied);
}

// ============= Chat =============

#[tokio::test]
async fn test_chat_appends_user_then_assistant_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze-market"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analyses": {"Initial Analysis": "A", "Persona": "B"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("authorization", "Bearer tok-123"))
        .and(body_json(json!({
            "message": "Hi",
            "context": {"Initial Analysis": "A", "Persona": "B"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Hello"})))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    app.store().set_auth(credentials());
    let mut dashboard = app.open_dashboard().unwrap();
    dashboard.set_selected([AnalysisKind::InitialAnalysis, AnalysisKind::Persona]);
    app.analyze(&mut dashboard).await;
    assert!(dashboard.select_tab(Tab::Chat));

    dashboard.chat.input = "Hi".into();
    let reply = app.chat(&mut dashboard).await.cloned().unwrap();
    assert_eq!(reply.text, "Hello");
    assert!(!reply.is_user);

    let transcript: Vec<(&str, bool)> = dashboard
        .chat
        .transcript()
        .iter()
        .map(|e| (e.text.as_str(), e.is_user))
        .collect();
    assert_eq!(transcript, vec![("Hi", true), ("Hello", false)]);
    assert!(dashboard.chat.input.is_empty());
}

#[tokio::test]
async fn test_chat_network_failure_appends_fallback() {
    let app = app_for(&dead_base_url().await);
    app.store().set_auth(credentials());
    let mut dashboard = app.open_dashboard().unwrap();

    dashboard.chat.input = "Hi".into();
    let reply = app.chat(&mut dashboard).await.cloned().unwrap();

    assert_eq!(reply.text, CHAT_FALLBACK);
    let transcript = dashboard.chat.transcript();
    assert_eq!(transcript.len(), 2);
    assert!(transcript[0].is_user);
    assert_eq!(transcript[0].text, "Hi");
}

#[tokio::test]
async fn test_chat_server_error_uses_fallback_not_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "LLM exploded"})),
        )
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    app.store().set_auth(credentials());
    let mut dashboard = app.open_dashboard().unwrap();
    dashboard.chat.input = "Hi".into();

    let reply = app.chat(&mut dashboard).await.cloned().unwrap();
    assert_eq!(reply.text, CHAT_FALLBACK);
}

#[tokio::test]
async fn test_blank_chat_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Hello"})))
        .expect(0)
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    app.store().set_auth(credentials());
    let mut dashboard = app.open_dashboard().unwrap();
    dashboard.chat.input = "   ".into();

    assert!(app.chat(&mut dashboard).await.is_none());
    assert!(dashboard.chat.transcript().is_empty());
}

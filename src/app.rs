//! Async driver tying the session store, route guard and backend together.
//!
//! [`WingmanApp`] performs each flow end to end: validate, call the backend,
//! update the session or dashboard, and report where navigation lands.

use crate::api::SalesApi;
use crate::auth::{reset_outcome, ForgotPasswordForm, LoginForm, RegisterForm};
use crate::dashboard::{AnalysisOutcome, ChatEntry, Dashboard};
use crate::routes::{Navigation, Route, RouteGuard};
use crate::session::{Credentials, Session, SessionStore};
use crate::types::{AuthResponse, Result};
use std::sync::Arc;

pub struct WingmanApp<A> {
    api: A,
    store: Arc<SessionStore>,
}

impl<A: SalesApi> WingmanApp<A> {
    pub fn new(api: A, store: Arc<SessionStore>) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn session(&self) -> Session {
        self.store.session()
    }

    /// Evaluates a navigation against the current session.
    pub fn navigate(&self, route: Route) -> Navigation {
        RouteGuard::evaluate(route, &self.store.session())
    }

    pub async fn login(&self, form: &LoginForm) -> Result<Navigation> {
        let req = form.validate()?;
        let resp = self.api.login(&req).await?;
        Ok(self.establish(resp))
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<Navigation> {
        let req = form.validate()?;
        let resp = self.api.register(&req).await?;
        Ok(self.establish(resp))
    }

    /// Returns the confirmation message on success.
    pub async fn forgot_password(&self, form: &ForgotPasswordForm) -> Result<&'static str> {
        let req = form.validate()?;
        reset_outcome(self.api.forgot_password(&req).await)
    }

    /// Clears the session and lands on the login view.
    pub fn logout(&self) -> Navigation {
        self.store.clear_auth();
        self.navigate(Route::Login)
    }

    /// Opens the dashboard if the guard admits it.
    pub fn open_dashboard(&self) -> std::result::Result<Dashboard, Navigation> {
        let session = self.store.session();
        match RouteGuard::evaluate(Route::Dashboard, &session) {
            Navigation::Render(_) => Ok(Dashboard::new(&session)),
            redirect => Err(redirect),
        }
    }

    /// Submits the dashboard's analysis form.
    pub async fn analyze(&self, dashboard: &mut Dashboard) -> AnalysisOutcome {
        let (ticket, req) = dashboard.begin_analysis();
        let token = self.store.token();
        let result = self.api.analyze_market(&req, token.as_deref()).await;
        dashboard.finish_analysis(ticket, result)
    }

    /// Sends the dashboard's chat input; returns the entry appended for the
    /// reply, or `None` when the input was blank.
    pub async fn chat<'d>(&self, dashboard: &'d mut Dashboard) -> Option<&'d ChatEntry> {
        let req = dashboard.begin_chat()?;
        let token = self.store.token();
        let result = self.api.chat(&req, token.as_deref()).await;
        dashboard.finish_chat(result);
        dashboard.chat.transcript().last()
    }

    fn establish(&self, resp: AuthResponse) -> Navigation {
        self.store.set_auth(Credentials::from_auth_response(resp));
        self.navigate(Route::Dashboard)
    }
}

//! Dashboard state: the analysis form, its results and the chat panel.
//!
//! The dashboard is driven in two halves per request. `begin_*` mutates the
//! state optimistically and hands back the request body; the caller performs
//! the HTTP call and feeds the outcome to `finish_*`. Front ends differ only
//! in how they perform the call.

pub mod chat;

pub use chat::{ChatEntry, ChatPanel, CHAT_FALLBACK};

use crate::analysis::{AnalysisKind, AnalysisResults};
use crate::session::Session;
use crate::types::{AnalyzeRequest, AnalyzeResponse, ChatRequest, ChatResponse, Result};

/// Reported when a successful response holds none of the requested analyses.
pub const NO_RESULTS_MESSAGE: &str = "Analysis returned no results";

/// Dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Analysis,
    Results,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Analysis, Tab::Results, Tab::Chat];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Analysis => "Analysis",
            Tab::Results => "Results",
            Tab::Chat => "Chat",
        }
    }
}

/// Free-text fields of the analysis form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisForm {
    pub company_website: String,
    pub company_description: String,
    pub competitor_website: String,
    pub prospect_url: String,
    pub prospect_job_title: String,
}

impl AnalysisForm {
    /// Pre-fills the company fields from the session profile.
    pub fn from_session(session: &Session) -> Self {
        Self {
            company_website: session.company_name().unwrap_or_default().to_string(),
            company_description: session.company_description().unwrap_or_default().to_string(),
            ..Self::default()
        }
    }
}

/// Identifies one analysis submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// What `finish_analysis` did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Results were replaced and the Results tab shown.
    Applied,
    /// The request failed; the message is now the dashboard error.
    Failed(String),
    /// A newer submission is outstanding; the response was discarded.
    Stale,
}

#[derive(Debug, Clone)]
struct Pending {
    ticket: Ticket,
    selected: Vec<AnalysisKind>,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub form: AnalysisForm,
    pub chat: ChatPanel,
    selected: Vec<AnalysisKind>,
    results: AnalysisResults,
    active_tab: Tab,
    error: Option<String>,
    next_ticket: u64,
    pending: Option<Pending>,
}

impl Dashboard {
    pub fn new(session: &Session) -> Self {
        Self {
            form: AnalysisForm::from_session(session),
            chat: ChatPanel::new(),
            selected: Vec::new(),
            results: AnalysisResults::new(),
            active_tab: Tab::Analysis,
            error: None,
            next_ticket: 0,
            pending: None,
        }
    }

    // ============= Selection =============

    /// Selected labels, always in display order.
    pub fn selected(&self) -> &[AnalysisKind] {
        &self.selected
    }

    pub fn is_selected(&self, kind: AnalysisKind) -> bool {
        self.selected.contains(&kind)
    }

    pub fn select(&mut self, kind: AnalysisKind) {
        if !self.is_selected(kind) {
            self.selected.push(kind);
            self.selected.sort_by_key(AnalysisKind::position);
        }
    }

    pub fn deselect(&mut self, kind: AnalysisKind) {
        self.selected.retain(|k| *k != kind);
    }

    pub fn toggle(&mut self, kind: AnalysisKind) {
        if self.is_selected(kind) {
            self.deselect(kind);
        } else {
            self.select(kind);
        }
    }

    pub fn set_selected(&mut self, kinds: impl IntoIterator<Item = AnalysisKind>) {
        self.selected.clear();
        for kind in kinds {
            self.select(kind);
        }
    }

    // ============= Tabs =============

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Results and Chat stay disabled until there is something to show.
    pub fn is_tab_enabled(&self, tab: Tab) -> bool {
        match tab {
            Tab::Analysis => true,
            Tab::Results | Tab::Chat => !self.results.is_empty(),
        }
    }

    /// Switches tabs; returns false (and stays put) for a disabled tab.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if !self.is_tab_enabled(tab) {
            return false;
        }
        self.active_tab = tab;
        true
    }

    // ============= Analysis =============

    pub fn results(&self) -> &AnalysisResults {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a submission with the current form and selection.
    pub fn begin_analysis(&mut self) -> (Ticket, AnalyzeRequest) {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.error = None;
        self.pending = Some(Pending {
            ticket,
            selected: self.selected.clone(),
        });

        let request = AnalyzeRequest {
            company_website: self.form.company_website.clone(),
            company_description: self.form.company_description.clone(),
            competitor_website: self.form.competitor_website.clone(),
            prospect_url: self.form.prospect_url.clone(),
            prospect_job_title: self.form.prospect_job_title.clone(),
            selected_analyses: self.selected.clone(),
        };
        (ticket, request)
    }

    /// Applies the outcome of the submission identified by `ticket`.
    ///
    /// A response with nothing left after filtering to the submitted
    /// selection counts as a failure, so prior results stay visible.
    pub fn finish_analysis(
        &mut self,
        ticket: Ticket,
        result: Result<AnalyzeResponse>,
    ) -> AnalysisOutcome {
        let pending = match self.pending.take() {
            Some(p) if p.ticket == ticket => p,
            other => {
                self.pending = other;
                tracing::debug!(?ticket, "Discarding stale analysis response");
                return AnalysisOutcome::Stale;
            }
        };

        match result {
            Ok(resp) => {
                let mut results: AnalysisResults = resp.analyses.into_iter().collect();
                let dropped = results.retain_selected(&pending.selected);
                if !dropped.is_empty() {
                    tracing::warn!(?dropped, "Backend returned analyses that were not requested");
                }
                if results.is_empty() {
                    return self.fail(NO_RESULTS_MESSAGE.to_string());
                }
                tracing::info!(count = results.len(), "Analysis results received");
                self.results = results;
                self.active_tab = Tab::Results;
                AnalysisOutcome::Applied
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn fail(&mut self, message: String) -> AnalysisOutcome {
        tracing::warn!("Analysis failed: {}", message);
        self.error = Some(message.clone());
        AnalysisOutcome::Failed(message)
    }

    // ============= Chat =============

    /// Sends the chat input with the current results as context.
    pub fn begin_chat(&mut self) -> Option<ChatRequest> {
        self.chat.send(&self.results)
    }

    pub fn finish_chat(&mut self, result: Result<ChatResponse>) {
        self.chat.receive(result);
    }
}

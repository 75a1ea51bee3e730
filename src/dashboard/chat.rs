//! Chat transcript seeded by the analysis results.

use crate::analysis::AnalysisResults;
use crate::types::{ChatRequest, ChatResponse, Result};
use chrono::{DateTime, Utc};

/// Appended in place of a reply when a chat request fails for any reason.
pub const CHAT_FALLBACK: &str = "Sorry, I encountered an error.";

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            timestamp: Utc::now(),
        }
    }
}

/// Input box plus the append-only transcript.
#[derive(Debug, Clone, Default)]
pub struct ChatPanel {
    pub input: String,
    transcript: Vec<ChatEntry>,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    /// Takes the current input as an outgoing message.
    ///
    /// Blank input is ignored. Otherwise the user entry is appended right
    /// away, the input is cleared and the request body is returned.
    pub fn send(&mut self, context: &AnalysisResults) -> Option<ChatRequest> {
        if self.input.trim().is_empty() {
            return None;
        }
        let message = std::mem::take(&mut self.input);
        self.transcript.push(ChatEntry::user(message.clone()));
        Some(ChatRequest {
            message,
            context: context.clone(),
        })
    }

    /// Appends the reply, or the fallback entry when the request failed.
    pub fn receive(&mut self, result: Result<ChatResponse>) {
        let entry = match result {
            Ok(resp) => ChatEntry::assistant(resp.response),
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                ChatEntry::assistant(CHAT_FALLBACK)
            }
        };
        self.transcript.push(entry);
    }
}

//! Analysis labels and the results returned for them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the fixed report types the backend can produce.
///
/// Serialized as the human-readable label the backend expects
/// (e.g. `"Initial Analysis"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnalysisKind {
    #[serde(rename = "Initial Analysis")]
    InitialAnalysis,
    #[serde(rename = "Deep Dive Analysis")]
    DeepDiveAnalysis,
    #[serde(rename = "Latest News")]
    LatestNews,
    #[serde(rename = "Recent Announcements")]
    RecentAnnouncements,
    #[serde(rename = "Persona")]
    Persona,
    #[serde(rename = "WorkForce Analysis")]
    WorkForceAnalysis,
    #[serde(rename = "Industry Analysis")]
    IndustryAnalysis,
    #[serde(rename = "Competitor Analysis")]
    CompetitorAnalysis,
    #[serde(rename = "Discovery Questionnaire")]
    DiscoveryQuestionnaire,
    #[serde(rename = "Meeting Strategy")]
    MeetingStrategy,
    #[serde(rename = "Prospecting Strategy")]
    ProspectingStrategy,
    #[serde(rename = "Similar Companies")]
    SimilarCompanies,
}

impl AnalysisKind {
    /// Every label, in display order.
    pub const ALL: [AnalysisKind; 12] = [
        AnalysisKind::InitialAnalysis,
        AnalysisKind::DeepDiveAnalysis,
        AnalysisKind::LatestNews,
        AnalysisKind::RecentAnnouncements,
        AnalysisKind::Persona,
        AnalysisKind::WorkForceAnalysis,
        AnalysisKind::IndustryAnalysis,
        AnalysisKind::CompetitorAnalysis,
        AnalysisKind::DiscoveryQuestionnaire,
        AnalysisKind::MeetingStrategy,
        AnalysisKind::ProspectingStrategy,
        AnalysisKind::SimilarCompanies,
    ];

    /// The label exchanged with the backend and shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisKind::InitialAnalysis => "Initial Analysis",
            AnalysisKind::DeepDiveAnalysis => "Deep Dive Analysis",
            AnalysisKind::LatestNews => "Latest News",
            AnalysisKind::RecentAnnouncements => "Recent Announcements",
            AnalysisKind::Persona => "Persona",
            AnalysisKind::WorkForceAnalysis => "WorkForce Analysis",
            AnalysisKind::IndustryAnalysis => "Industry Analysis",
            AnalysisKind::CompetitorAnalysis => "Competitor Analysis",
            AnalysisKind::DiscoveryQuestionnaire => "Discovery Questionnaire",
            AnalysisKind::MeetingStrategy => "Meeting Strategy",
            AnalysisKind::ProspectingStrategy => "Prospecting Strategy",
            AnalysisKind::SimilarCompanies => "Similar Companies",
        }
    }

    /// Looks up a label exactly as the backend spells it.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Position in the display order.
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|kind| kind == self)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown analysis '{0}'")]
pub struct UnknownAnalysis(pub String);

impl FromStr for AnalysisKind {
    type Err = UnknownAnalysis;

    /// Case-insensitive; also accepts kebab/snake spellings such as
    /// `deep-dive-analysis`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|kind| normalize(kind.label()) == wanted)
            .ok_or_else(|| UnknownAnalysis(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Text blocks returned by the backend, keyed by analysis label.
///
/// Keys are plain strings so that a response naming a label this client does
/// not know still round-trips into the chat context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResults(BTreeMap<String, String>);

impl AnalysisResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn insert(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.0.insert(label.into(), text.into());
    }

    /// Keeps only the entries whose label is in `selected`; returns the
    /// labels that were dropped.
    pub fn retain_selected(&mut self, selected: &[AnalysisKind]) -> Vec<String> {
        let mut dropped = Vec::new();
        self.0.retain(|label, _| {
            let keep = AnalysisKind::from_label(label).is_some_and(|kind| selected.contains(&kind));
            if !keep {
                dropped.push(label.clone());
            }
            keep
        });
        dropped
    }

    /// Result cards as `(label, body)` pairs in display order.
    pub fn cards(&self) -> Vec<(&str, &str)> {
        let mut cards: Vec<(&str, &str)> = self
            .0
            .iter()
            .map(|(label, body)| (label.as_str(), body.as_str()))
            .collect();
        cards.sort_by_key(|(label, _)| {
            AnalysisKind::from_label(label)
                .map(|kind| kind.position())
                .unwrap_or(AnalysisKind::ALL.len())
        });
        cards
    }
}

impl FromIterator<(String, String)> for AnalysisResults {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

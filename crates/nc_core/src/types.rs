use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of the submitted text kept in a history entry.
const HISTORY_TEXT_LEN: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "REAL")]
    Real,
    #[serde(rename = "FAKE")]
    Fake,
}

impl Label {
    /// Class index used by the classifier artifacts: 1 = Real, 0 = Fake.
    pub fn from_class(class: usize) -> Self {
        if class == 1 {
            Label::Real
        } else {
            Label::Fake
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Real => write!(f, "REAL"),
            Label::Fake => write!(f, "FAKE"),
        }
    }
}

/// Outbound record for a single prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: Label,
    pub confidence_real_percent: f64,
}

/// One entry in the session-scoped prediction history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub label: Label,
    pub confidence_real_percent: f64,
    pub predicted_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn record(submitted: &str, verdict: &Verdict) -> Self {
        Self {
            text: truncate_for_history(submitted),
            label: verdict.label,
            confidence_real_percent: verdict.confidence_real_percent,
            predicted_at: Utc::now(),
        }
    }
}

fn truncate_for_history(text: &str) -> String {
    if text.chars().count() <= HISTORY_TEXT_LEN {
        text.to_string()
    } else {
        let head: String = text.chars().take(HISTORY_TEXT_LEN).collect();
        format!("{}...", head)
    }
}

use nc_core::{HistoryEntry, Verdict};
use nc_pipeline::Pipeline;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handler state: the immutable pipeline plus the session-scoped
/// prediction history. The history lock serializes concurrent appends;
/// the pipeline needs no locking because nothing writes to it.
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    history: RwLock<Vec<HistoryEntry>>,
}

impl AppState {
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            pipeline,
            history: RwLock::new(Vec::new()),
        }
    }

    pub async fn record(&self, submitted: &str, verdict: &Verdict) {
        let entry = HistoryEntry::record(submitted, verdict);
        self.history.write().await.push(entry);
    }

    /// Newest first.
    pub async fn history(&self) -> Vec<HistoryEntry> {
        let history = self.history.read().await;
        history.iter().rev().cloned().collect()
    }

    pub async fn clear_history(&self) {
        self.history.write().await.clear();
    }
}

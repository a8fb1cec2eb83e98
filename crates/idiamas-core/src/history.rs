use std::time::SystemTime;

use idiamas_types::TranslationResult;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub result: TranslationResult,
    pub timestamp: SystemTime,
}

/// Translations produced during this session, oldest first. Never persisted.
#[derive(Debug, Default)]
pub struct TranslationHistory {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl TranslationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, result: TranslationResult) {
        let mut entries = self.entries.write().await;
        entries.push(HistoryEntry {
            result,
            timestamp: SystemTime::now(),
        });
        tracing::debug!("History now holds {} entries", entries.len());
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn latest(&self) -> Option<HistoryEntry> {
        self.entries.read().await.last().cloned()
    }

    pub async fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.read().await.clone()
    }
}

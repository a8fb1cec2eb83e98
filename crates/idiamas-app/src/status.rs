use std::sync::Arc;
use std::time::SystemTime;

use tokio::sync::RwLock;

/// How a translate cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Translated,
    NoText,
    Failed,
}

/// Counters for the session, logged on shutdown
#[derive(Clone, Debug, Default)]
pub struct CycleStatus {
    pub cycles: u64,
    pub translated: u64,
    pub empty: u64,
    pub failures: u64,
    pub ignored_triggers: u64,
    pub last_cycle: Option<SystemTime>,
}

pub struct AppStatus {
    pub cycle: Arc<RwLock<CycleStatus>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            cycle: Arc::new(RwLock::new(CycleStatus::default())),
        }
    }

    pub async fn record(&self, outcome: CycleOutcome) {
        let mut status = self.cycle.write().await;
        status.cycles += 1;
        status.last_cycle = Some(SystemTime::now());
        match outcome {
            CycleOutcome::Translated => status.translated += 1,
            CycleOutcome::NoText => status.empty += 1,
            CycleOutcome::Failed => status.failures += 1,
        }
    }

    pub async fn record_ignored(&self) {
        self.cycle.write().await.ignored_triggers += 1;
    }

    pub async fn snapshot(&self) -> CycleStatus {
        self.cycle.read().await.clone()
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_outcomes() {
        let status = AppStatus::new();
        status.record(CycleOutcome::Translated).await;
        status.record(CycleOutcome::NoText).await;
        status.record(CycleOutcome::Failed).await;
        status.record_ignored().await;

        let snapshot = status.snapshot().await;
        assert_eq!(snapshot.cycles, 3);
        assert_eq!(snapshot.translated, 1);
        assert_eq!(snapshot.empty, 1);
        assert_eq!(snapshot.failures, 1);
        assert_eq!(snapshot.ignored_triggers, 1);
        assert!(snapshot.last_cycle.is_some());
    }
}

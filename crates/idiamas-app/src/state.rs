use std::sync::Arc;

use idiamas_config::Config;
use idiamas_core::{CycleGate, TranslationHistory};

use crate::status::AppStatus;

/// Backend state shared by the event loop and pipeline tasks
pub struct AppState {
    pub config: Arc<Config>,
    pub gate: CycleGate,
    pub history: TranslationHistory,
    pub status: AppStatus,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            gate: CycleGate::new(),
            history: TranslationHistory::new(),
            status: AppStatus::new(),
        }
    }
}

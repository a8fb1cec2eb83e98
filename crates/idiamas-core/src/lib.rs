pub mod cycle;
pub mod history;
pub mod preprocess;

pub use cycle::{BusyGuard, CycleGate, CyclePhase};
pub use history::{HistoryEntry, TranslationHistory};
pub use preprocess::{DefaultPreprocessor, Preprocessor};

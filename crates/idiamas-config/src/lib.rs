use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::hotkey::HotkeyConfig;
use self::ocr::OcrConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;
use self::vars::Vars;

pub mod error;
pub mod hotkey;
pub mod ocr;
pub mod translator;
pub mod ui;
mod vars;

pub use error::ConfigError;
pub use hotkey::HotkeyPair;

fn default_log_file() -> PathBuf {
    PathBuf::from("app.log")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub ocr: OcrConfig,
    pub translator: TranslatorConfig,
    pub hotkeys: HotkeyConfig,
    pub ui: UiConfig,

    /// Append-only diagnostic log
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Config {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars::new(lookup);

        // API key first so a bare environment reports the most useful error
        let translator = TranslatorConfig::from_vars(&vars)?;
        let ocr = OcrConfig::from_vars(&vars)?;

        Ok(Config {
            ocr,
            translator,
            hotkeys: HotkeyConfig::from_vars(&vars)?,
            ui: UiConfig::from_vars(&vars)?,
            log_file: vars
                .get("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(default_log_file),
        })
    }
}

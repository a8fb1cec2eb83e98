use global_hotkey::hotkey::HotKey;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vars::Vars;

fn default_translate() -> String {
    "ctrl+shift+KeyI".to_string()
}

fn default_quit() -> String {
    "ctrl+shift+KeyQ".to_string()
}

/// Global hotkeys, in `global-hotkey` accelerator syntax
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HotkeyConfig {
    #[serde(default = "default_translate")]
    pub translate: String,
    #[serde(default = "default_quit")]
    pub quit: String,
}

/// Parsed translate and quit accelerators, guaranteed distinct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyPair {
    pub translate: HotKey,
    pub quit: HotKey,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            translate: default_translate(),
            quit: default_quit(),
        }
    }
}

impl HotkeyConfig {
    pub(crate) fn from_vars<F>(vars: &Vars<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            translate: vars.string_or("TRANSLATE_HOTKEY", &default_translate()),
            quit: vars.string_or("QUIT_HOTKEY", &default_quit()),
        };
        config.keys()?;
        Ok(config)
    }

    /// Parse both accelerators. Spellings that name the same key chord, such
    /// as `ctrl+shift+KeyI` and `shift+control+KeyI`, count as equal.
    pub fn keys(&self) -> Result<HotkeyPair, ConfigError> {
        let translate = parse("TRANSLATE_HOTKEY", &self.translate)?;
        let quit = parse("QUIT_HOTKEY", &self.quit)?;

        if translate.id() == quit.id() {
            return Err(ConfigError::invalid(
                "QUIT_HOTKEY",
                self.quit.as_str(),
                "must differ from TRANSLATE_HOTKEY",
            ));
        }

        Ok(HotkeyPair { translate, quit })
    }
}

fn parse(key: &'static str, raw: &str) -> Result<HotKey, ConfigError> {
    raw.parse::<HotKey>()
        .map_err(|e| ConfigError::invalid(key, raw, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(translate: &str, quit: &str) -> HotkeyConfig {
        HotkeyConfig {
            translate: translate.to_string(),
            quit: quit.to_string(),
        }
    }

    #[test]
    fn defaults_parse_to_distinct_keys() {
        let pair = HotkeyConfig::default().keys().unwrap();
        assert_ne!(pair.translate.id(), pair.quit.id());
        assert_eq!(pair.translate, "ctrl+shift+KeyI".parse::<HotKey>().unwrap());
    }

    #[test]
    fn reordered_modifiers_name_the_same_key() {
        let err = config("ctrl+shift+KeyI", "shift+ctrl+KeyI").keys().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "QUIT_HOTKEY", .. }));
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        let err = config("ctrl+shift+NotAKey", "ctrl+shift+KeyQ").keys().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "TRANSLATE_HOTKEY", .. }));

        let err = config("ctrl+shift+KeyI", "").keys().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "QUIT_HOTKEY", .. }));
    }
}

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vars::Vars;

fn default_fade_height() -> f32 {
    64.0
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Height of the fade gradient at the scroll edges, logical px
    #[serde(default = "default_fade_height")]
    pub fade_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fade_height: default_fade_height(),
        }
    }
}

impl UiConfig {
    pub(crate) fn from_vars<F>(vars: &Vars<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fade_height = vars.parse_or::<f32>("FADE_HEIGHT", default_fade_height())?;
        if !(fade_height.is_finite() && fade_height > 0.0) {
            return Err(ConfigError::invalid(
                "FADE_HEIGHT",
                fade_height.to_string(),
                "must be positive",
            ));
        }
        Ok(Self { fade_height })
    }
}

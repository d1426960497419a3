use crate::config::default_script_path;

use std::path::PathBuf;

use longplay_core::{Scaler, ScriptSettings};
use serde::{Deserialize, Serialize};

/// How undersized segments are fitted, as written in `config.toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalerSetting {
    /// Borders only.
    #[default]
    None,
    /// Whole-factor upscale, then borders.
    Integral,
}

impl From<ScalerSetting> for Scaler {
    fn from(setting: ScalerSetting) -> Self {
        match setting {
            ScalerSetting::None => Scaler::None,
            ScalerSetting::Integral => Scaler::Integral,
        }
    }
}

/// Join script configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Where the join script is written.
    #[serde(default = "default_script_path")]
    pub path: PathBuf,

    /// Fitting strategy for segments smaller than the largest one.
    #[serde(default)]
    pub scaler: ScalerSetting,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            path: default_script_path(),
            scaler: ScalerSetting::default(),
        }
    }
}

impl ScriptConfig {
    /// Core settings, optionally writing to `path` instead of the configured one.
    pub fn settings(&self, path: Option<PathBuf>) -> ScriptSettings {
        ScriptSettings {
            path: path.unwrap_or_else(|| self.path.clone()),
            scaler: self.scaler.into(),
        }
    }
}

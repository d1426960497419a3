#[allow(clippy::module_inception)]
mod config;
mod script_config;

pub(crate) use {
    config::Config,
    script_config::{ScalerSetting, ScriptConfig},
};

pub(crate) const DEFAULT_SCRIPT_PATH: &str = "longplay.avs";

pub(crate) fn default_script_path() -> std::path::PathBuf {
    std::path::PathBuf::from(DEFAULT_SCRIPT_PATH)
}

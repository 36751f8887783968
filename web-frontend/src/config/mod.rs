use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;
use std::path::PathBuf;

/// Output directory of `flutter build web`.
pub const DEFAULT_WEB_ROOT: &str = "build/web";

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub common: core_config::Config,
    /// Build output holding `index.html`, the rendered `flutter_bootstrap.js`
    /// and the compiled client bundle.
    pub web_root: PathBuf,
}

impl WebConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(WebConfig {
            web_root: PathBuf::from(get_env("WEB_ROOT", Some(DEFAULT_WEB_ROOT), false)?),
            common,
        })
    }
}

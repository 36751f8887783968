use crate::services::signer::gcs::GCS_DEFAULT_ENDPOINT;
use secrecy::Secret;
use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;

#[derive(Debug, Clone)]
pub struct SignedUrlConfig {
    pub common: core_config::Config,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// HMAC key access id of the signing service account.
    pub access_id: String,
    pub secret: Secret<String>,
    pub endpoint: String,
}

impl SignedUrlConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = common.is_prod();

        Ok(SignedUrlConfig {
            storage: StorageSettings {
                access_id: get_env("GCS_HMAC_ACCESS_ID", None, is_prod)?,
                secret: Secret::new(get_env("GCS_HMAC_SECRET", None, is_prod)?),
                endpoint: get_env("GCS_ENDPOINT", Some(GCS_DEFAULT_ENDPOINT), false)?,
            },
            common,
        })
    }
}

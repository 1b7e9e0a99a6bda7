use serde::{Deserialize, Serialize};
use crate::config::enums::log_format::LogFormat;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::certificate_config::CertificateConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default)]
    pub certificate: CertificateConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    pub api_server: Vec<ApiServerConfig>,
    #[serde(default)]
    pub sentry_config: SentryConfig
}

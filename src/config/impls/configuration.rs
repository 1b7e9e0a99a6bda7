use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::certificate::enums::thumbprint_algorithm::ThumbprintAlgorithm;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::log_format::LogFormat;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::certificate_config::CertificateConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;

pub const ENV_CERT_PFX_PATH: &str = "PRIVATE_JWK_CERT_PFX_PATH";
pub const ENV_CERT_PFX_PASSWORD: &str = "PRIVATE_JWK_CERT_PFX_PASSWORD";
pub const ENV_THUMBPRINT_ALGORITHM: &str = "PRIVATE_JWK_THUMBPRINT_ALGORITHM";
pub const ENV_LOG_LEVEL: &str = "PRIVATE_JWK_LOG_LEVEL";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_format: LogFormat::text,
            certificate: CertificateConfig {
                path: String::from(""),
                passphrase: String::from(""),
                thumbprint_algorithm: ThumbprintAlgorithm::sha256,
            },
            cache: CacheConfig::default(),
            api_server: vec!(
                ApiServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8080"),
                    keep_alive: Some(60),
                    request_timeout: Some(30),
                    disconnect_timeout: Some(30),
                    threads: Some(available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1)),
                }
            ),
            sentry_config: SentryConfig::default()
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let mut config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => return Err(CustomError::new(&format!("could not serialize default configuration: {e}")))
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and set the certificate section, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        if let Err(error) = config.apply_env() {
            eprintln!("[ERROR] {error}");
            return Err(CustomError::new(&error.to_string()));
        }

        println!("[VALIDATE] Validating configuration...");
        match config.validate() {
            Ok(warnings) => {
                for warning in warnings {
                    println!("[VALIDATE] Warning: {warning}");
                }
                Ok(config)
            }
            Err(error) => {
                eprintln!("[ERROR] {error}");
                Err(CustomError::new(&error.to_string()))
            }
        }
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigurationError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps an environment variable
    /// name to its value. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());
        if let Some(path) = lookup(ENV_CERT_PFX_PATH) {
            self.certificate.path = path;
        }
        if let Some(passphrase) = lookup(ENV_CERT_PFX_PASSWORD) {
            self.certificate.passphrase = passphrase;
        }
        if let Some(algorithm) = lookup(ENV_THUMBPRINT_ALGORITHM) {
            self.certificate.thumbprint_algorithm = algorithm
                .parse::<ThumbprintAlgorithm>()
                .map_err(|e| ConfigurationError::ValidationError(format!("{ENV_THUMBPRINT_ALGORITHM}: {e}")))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.to_lowercase();
        }
        Ok(())
    }

    /// Returns the warnings that do not prevent booting, or the first hard error.
    pub fn validate(&self) -> Result<Vec<String>, ConfigurationError> {
        let mut warnings = Vec::new();

        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log_level '{}'", self.log_level)));
        }

        for api_server in &self.api_server {
            if api_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("[API] invalid bind_address '{}'", api_server.bind_address)));
            }
            if api_server.threads == Some(0) {
                return Err(ConfigurationError::ValidationError(format!("[API] threads for {} must be at least 1", api_server.bind_address)));
            }
        }
        if !self.api_server.iter().any(|api_server| api_server.enabled) {
            warnings.push(String::from("no api_server is enabled"));
        }

        if self.certificate.path.trim().is_empty() {
            warnings.push(String::from("certificate.path is not set, every request will fail with a configuration error"));
        }
        if self.certificate.passphrase.is_empty() {
            warnings.push(String::from("certificate.passphrase is not set, every request will fail with a configuration error"));
        }
        if self.cache.enabled && self.cache.ttl == Some(0) {
            warnings.push(String::from("cache.ttl is 0, entries expire immediately"));
        }

        Ok(warnings)
    }
}

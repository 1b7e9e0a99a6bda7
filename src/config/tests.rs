#[cfg(test)]
mod config_tests {
    mod log_format_tests {
        use crate::config::enums::log_format::LogFormat;

        #[test]
        fn test_log_format_default() {
            assert_eq!(LogFormat::default(), LogFormat::text);
        }

        #[test]
        fn test_log_format_serialization() {
            assert_eq!(serde_json::to_string(&LogFormat::text).unwrap(), "\"text\"");
            assert_eq!(serde_json::to_string(&LogFormat::json).unwrap(), "\"json\"");
            let parsed: LogFormat = serde_json::from_str("\"json\"").unwrap();
            assert_eq!(parsed, LogFormat::json);
        }
    }

    mod certificate_config_tests {
        use crate::certificate::enums::thumbprint_algorithm::ThumbprintAlgorithm;
        use crate::config::structs::certificate_config::CertificateConfig;

        #[test]
        fn test_debug_redacts_passphrase() {
            let config = CertificateConfig::new("/certs/service.pfx", "hunter2");
            let debug_str = format!("{:?}", config);
            assert!(debug_str.contains("/certs/service.pfx"));
            assert!(debug_str.contains("<redacted>"));
            assert!(!debug_str.contains("hunter2"));
        }

        #[test]
        fn test_debug_marks_empty_passphrase() {
            let config = CertificateConfig::new("/certs/service.pfx", "");
            assert!(format!("{:?}", config).contains("<empty>"));
        }

        #[test]
        fn test_is_complete() {
            assert!(CertificateConfig::new("a.pfx", "pw").is_complete());
            assert!(!CertificateConfig::new("  ", "pw").is_complete());
            assert!(!CertificateConfig::new("a.pfx", "").is_complete());
        }

        #[test]
        fn test_defaults_to_sha256() {
            let config: CertificateConfig = toml::from_str("path = \"a.pfx\"").unwrap();
            assert_eq!(config.thumbprint_algorithm, ThumbprintAlgorithm::sha256);
            assert_eq!(config.passphrase, "");
        }

        #[test]
        fn test_missing_fields_fall_back_individually() {
            let empty: CertificateConfig = toml::from_str("").unwrap();
            assert_eq!(empty, CertificateConfig::default());

            let config: CertificateConfig = toml::from_str("passphrase = \"pw\"\nthumbprint_algorithm = \"sha1\"").unwrap();
            assert_eq!(config.path, "");
            assert_eq!(config.passphrase, "pw");
            assert_eq!(config.thumbprint_algorithm, ThumbprintAlgorithm::sha1);
        }
    }

    mod configuration_tests {
        use std::collections::HashMap;
        use crate::certificate::enums::thumbprint_algorithm::ThumbprintAlgorithm;
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::enums::log_format::LogFormat;
        use crate::config::impls::configuration::{ENV_CERT_PFX_PASSWORD, ENV_CERT_PFX_PATH, ENV_LOG_LEVEL, ENV_THUMBPRINT_ALGORITHM};
        use crate::config::structs::configuration::Configuration;

        fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();
            move |key| map.get(key).cloned()
        }

        #[test]
        fn test_init_round_trips_through_toml() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let parsed = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(parsed.log_level, "info");
            assert_eq!(parsed.log_format, LogFormat::text);
            assert_eq!(parsed.api_server, config.api_server);
            assert_eq!(parsed.cache, config.cache);
            assert!(!parsed.cache.enabled);
        }

        #[test]
        fn test_load_minimal_file_uses_defaults() {
            let data = br#"
log_level = "debug"

[[api_server]]
enabled = true
bind_address = "127.0.0.1:8080"
"#;
            let config = Configuration::load(data).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.log_format, LogFormat::text);
            assert_eq!(config.certificate.path, "");
            assert!(!config.cache.enabled);
            assert!(!config.sentry_config.enabled);
            assert_eq!(config.api_server[0].request_timeout, None);
        }

        #[test]
        fn test_load_rejects_broken_toml() {
            assert!(Configuration::load(b"log_level = ").is_err());
        }

        #[test]
        fn test_load_file_missing_is_io_error() {
            let result = Configuration::load_file("/nonexistent/private-jwk/config.toml");
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }

        #[test]
        fn test_env_overrides_file_values() {
            let mut config = Configuration::init();
            config.certificate.path = String::from("file.pfx");
            let lookup = lookup_from(&[
                (ENV_CERT_PFX_PATH, "/env/cert.pfx"),
                (ENV_CERT_PFX_PASSWORD, "from-env"),
                (ENV_THUMBPRINT_ALGORITHM, "SHA-1"),
                (ENV_LOG_LEVEL, "DEBUG"),
            ]);
            config.apply_overrides(lookup).unwrap();
            assert_eq!(config.certificate.path, "/env/cert.pfx");
            assert_eq!(config.certificate.passphrase, "from-env");
            assert_eq!(config.certificate.thumbprint_algorithm, ThumbprintAlgorithm::sha1);
            assert_eq!(config.log_level, "debug");
        }

        #[test]
        fn test_empty_env_values_are_ignored() {
            let mut config = Configuration::init();
            config.certificate.path = String::from("file.pfx");
            config.apply_overrides(lookup_from(&[(ENV_CERT_PFX_PATH, "")])).unwrap();
            assert_eq!(config.certificate.path, "file.pfx");
        }

        #[test]
        fn test_unknown_thumbprint_algorithm_is_rejected() {
            let mut config = Configuration::init();
            let result = config.apply_overrides(lookup_from(&[(ENV_THUMBPRINT_ALGORITHM, "md5")]));
            assert!(matches!(result, Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validate_warns_on_missing_credentials() {
            let config = Configuration::init();
            let warnings = config.validate().unwrap();
            assert_eq!(warnings.len(), 2);
            assert!(warnings[0].contains("certificate.path"));
            assert!(warnings[1].contains("certificate.passphrase"));
        }

        #[test]
        fn test_validate_accepts_complete_config() {
            let mut config = Configuration::init();
            config.certificate.path = String::from("cert.pfx");
            config.certificate.passphrase = String::from("secret");
            assert!(config.validate().unwrap().is_empty());
        }

        #[test]
        fn test_validate_rejects_bad_bind_address() {
            let mut config = Configuration::init();
            config.api_server[0].bind_address = String::from("localhost");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("loud");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_save_and_load_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            let mut config = Configuration::init();
            config.certificate.path = String::from("cert.pfx");
            Configuration::save_file(path, toml::to_string(&config).unwrap()).unwrap();
            let loaded = Configuration::load_file(path).unwrap();
            assert_eq!(loaded.certificate.path, "cert.pfx");
        }

        #[test]
        fn test_load_from_file_creates_defaults_when_asked() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            assert!(Configuration::load_from_file(path, false).is_err());
            assert!(!dir.path().join("config.toml").exists());
            assert!(Configuration::load_from_file(path, true).is_err());
            let created = Configuration::load_file(path).unwrap();
            assert_eq!(created.log_level, "info");
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("bad"));
            assert_eq!(error.to_string(), "invalid configuration: bad");
        }
    }
}

//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// API server configuration (address, timeouts, workers).
pub mod api_server_config;

/// In-memory certificate cache configuration.
pub mod cache_config;

/// PKCS#12 bundle location and credentials.
pub mod certificate_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Sentry error reporting configuration.
pub mod sentry_config;

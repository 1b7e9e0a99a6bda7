//! Configuration management module.
//!
//! Loads `config.toml` with `toml`, then applies environment overrides and
//! validates the result.
//!
//! # Configuration Structure
//!
//! - **log_level** / **log_format**: console logging
//! - **certificate**: PKCS#12 path, passphrase and thumbprint algorithm
//! - **cache**: optional in-memory certificate cache
//! - **api_server**: HTTP server instances
//! - **sentry_config**: error reporting
//!
//! # Environment Overrides
//!
//! | Variable | Field |
//! |---|---|
//! | `PRIVATE_JWK_CERT_PFX_PATH` | `certificate.path` |
//! | `PRIVATE_JWK_CERT_PFX_PASSWORD` | `certificate.passphrase` |
//! | `PRIVATE_JWK_THUMBPRINT_ALGORITHM` | `certificate.thumbprint_algorithm` |
//! | `PRIVATE_JWK_LOG_LEVEL` | `log_level` |
//!
//! # Example
//!
//! ```rust,ignore
//! use private_jwk::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (errors, log format).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;

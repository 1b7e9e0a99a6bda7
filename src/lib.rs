//! # private-jwk
//!
//! Serves a locally stored PKCS#12 (PFX) certificate over HTTP, both as its
//! DER encoding and as a private RSA JSON Web Key (RFC 7517/7518).
//!
//! ## Overview
//!
//! Every request runs the certificate pipeline: the PFX file is opened with
//! the configured passphrase, the RSA private key is decomposed into its
//! JWK parameters, and the certificate's expiration, thumbprint and serial
//! number are attached to the response as `X-Certificate-*` headers. An
//! optional in-memory cache keeps parsed bundles between requests until the
//! file, the passphrase or the TTL changes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use private_jwk::certificate::structs::certificate_pipeline::CertificatePipeline;
//! use private_jwk::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let pipeline = CertificatePipeline::new(Arc::new(config.certificate.clone()), None);
//! let document = pipeline.jwk()?;
//! println!("{}", serde_json::to_string(&document.jwk)?);
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTP endpoints, error mapping and metrics exposition
//! - [`cache`] - Optional cache of loaded certificate bundles
//! - [`certificate`] - PKCS#12 loading, RSA key extraction, metadata and JWK encoding
//! - [`common`] - Logging setup, encoding helpers and shared errors
//! - [`config`] - Configuration management, TOML parsing and environment overrides
//! - [`stats`] - Request counters, latency histogram and the metrics recorder seam
//! - [`structs`] - CLI argument parsing
//! - [`utils`] - Sentry tracing helpers

/// HTTP API module.
///
/// Serves `/api/certificate` and `/api/jwk`, plus `/stats` and `/metrics`
/// for monitoring.
pub mod api;

/// Cache of loaded certificate bundles keyed by file path.
pub mod cache;

/// Certificate processing module.
///
/// Loads the PKCS#12 bundle, extracts the RSA key and certificate metadata,
/// and encodes the key as a JWK.
pub mod certificate;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading and validating configuration from TOML files and
/// environment variables.
pub mod config;

/// Statistics tracking and monitoring module.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Utility modules.
pub mod utils;

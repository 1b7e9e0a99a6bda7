//! HTTP API serving the certificate and its private JWK.
//!
//! # Endpoints
//!
//! - `GET /api/certificate` - DER certificate (`application/pkix-cert`)
//! - `GET /api/jwk` - private RSA JWK as JSON
//! - `GET /stats` - request statistics as JSON
//! - `GET /metrics` - request statistics in Prometheus text format
//!
//! Successful certificate and JWK responses carry the
//! `X-Certificate-Expiration`, `X-Certificate-Thumbprint`,
//! `X-Certificate-Thumbprint-Algorithm` and `X-Certificate-Serial-Number`
//! headers. Failures return `{"status": <kind>, "message": <text>}` with
//! 400 for configuration errors and 500 for everything else.

/// Data structures for API service context.
pub mod structs;

/// Implementation blocks for API data structures.
pub mod impls;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Certificate endpoint.
pub mod api_certificate;

/// JWK endpoint.
pub mod api_jwk;

/// Statistics and monitoring endpoints.
pub mod api_stats;

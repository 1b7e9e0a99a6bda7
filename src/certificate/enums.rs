//! Certificate pipeline enumerations.

/// Typed errors returned by the pipeline.
pub mod certificate_error;

/// Digest used for the certificate thumbprint header.
pub mod thumbprint_algorithm;

//! Implementation blocks for the certificate pipeline.

/// CertificateError helpers (kind names).
pub mod certificate_error;

/// ThumbprintAlgorithm digests and display.
pub mod thumbprint_algorithm;

/// CertificateBundle debug output and accessors.
pub mod certificate_bundle;

/// RsaKeyMaterial debug output.
pub mod rsa_key_material;

/// Jwk debug output.
pub mod jwk;

/// PKCS#12 loading.
pub mod certificate_loader;

/// RSA parameter extraction and CRT completion.
pub mod rsa_key_extractor;

/// Metadata derivation.
pub mod certificate_metadata_extractor;

/// JWK encoding.
pub mod jwk_encoder;

/// Pipeline orchestration.
pub mod certificate_pipeline;

//! Certificate pipeline data structures.

/// Loaded PKCS#12 certificate handle.
pub mod certificate_bundle;

/// RSA parameters as minimal big-endian byte sequences.
pub mod rsa_key_material;

/// Thumbprint, serial number and expiration of a certificate.
pub mod certificate_metadata;

/// JSON Web Key record.
pub mod jwk;

/// PKCS#12 loader.
pub mod certificate_loader;

/// RSA key extractor.
pub mod rsa_key_extractor;

/// Certificate metadata extractor.
pub mod certificate_metadata_extractor;

/// JWK encoder.
pub mod jwk_encoder;

/// Fully processed certificate (bundle, metadata and key material).
pub mod certificate_snapshot;

/// Pipeline outputs handed to the HTTP layer.
pub mod certificate_document;

/// The load -> extract/describe -> encode chain.
pub mod certificate_pipeline;

//! Certificate-to-key-material pipeline.
//!
//! Loads a PKCS#12 (PFX) bundle from disk, extracts its RSA key pair,
//! derives the certificate identity metadata and encodes everything as a
//! private JSON Web Key.
//!
//! # Components
//!
//! - `CertificateLoader` - opens the PKCS#12 container with its passphrase
//! - `RsaKeyExtractor` - reads the RSA parameters in CRT form
//! - `CertificateMetadataExtractor` - thumbprint, serial number, expiration
//! - `JwkEncoder` - base64url rendering of the key material
//! - `CertificatePipeline` - the `load -> extract/describe -> encode` chain
//!
//! The pipeline returns plain data or a typed `CertificateError`; it does
//! not know about HTTP or telemetry.
//!
//! # Example
//!
//! ```rust,ignore
//! use private_jwk::certificate::structs::certificate_loader::CertificateLoader;
//! use private_jwk::certificate::structs::rsa_key_extractor::RsaKeyExtractor;
//!
//! let bundle = CertificateLoader::load("certificate.pfx", "passphrase")?;
//! let material = RsaKeyExtractor::extract(&bundle)?;
//! ```

/// Error taxonomy and thumbprint algorithm selection.
pub mod enums;

/// Data structures for bundles, key material, metadata and JWKs.
pub mod structs;

/// Implementation blocks for the pipeline components.
pub mod impls;

#[cfg(test)]
pub(crate) mod fixtures;

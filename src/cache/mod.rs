//! In-memory certificate cache.
//!
//! Optional layer that keeps one processed PKCS#12 snapshot per file path
//! so requests do not reparse the bundle every time.
//!
//! # Invalidation
//!
//! An entry is reused while all of these hold:
//! - its TTL (if any) has not expired
//! - the file modification time is unchanged (when `watch_modified` is set)
//! - the passphrase digest matches the one it was loaded with
//!
//! Reloads are serialized per path, so concurrent misses on the same file
//! run the loader once. Load failures are never cached; a failed reload
//! evicts the stale entry.
//!
//! # Example
//!
//! ```rust,ignore
//! use private_jwk::cache::structs::certificate_cache::CertificateCache;
//!
//! let cache = CertificateCache::new(Some(Duration::from_secs(300)), true);
//! let entry = cache.get_or_load(path, passphrase, || CertificatePipeline::snapshot(&config))?;
//! ```

/// Cache data structures.
pub mod structs;

/// Implementation blocks for the cache.
pub mod impls;

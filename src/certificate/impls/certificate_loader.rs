use crate::certificate::enums::certificate_error::CertificateError;
use crate::certificate::structs::certificate_bundle::CertificateBundle;
use crate::certificate::structs::certificate_loader::CertificateLoader;
use chrono::{
    DateTime,
    Utc
};
use log::debug;
use openssl::asn1::{
    Asn1Time,
    Asn1TimeRef
};
use openssl::pkcs12::Pkcs12;

impl CertificateLoader {
    /// Opens the PKCS#12 container at `path` and decrypts it with
    /// `passphrase`.
    ///
    /// Empty inputs are rejected before the filesystem is touched. Load
    /// failures carry the path and the OpenSSL cause, never the passphrase.
    #[tracing::instrument(level = "debug", skip(passphrase))]
    pub fn load(path: &str, passphrase: &str) -> Result<CertificateBundle, CertificateError> {
        Self::validate_inputs(path, passphrase)?;
        let data = std::fs::read(path)
            .map_err(|e| CertificateError::CertificateLoad(format!("{}: {}", path, e)))?;
        let parsed = Pkcs12::from_der(&data)
            .map_err(|e| CertificateError::CertificateLoad(format!("{}: not a PKCS#12 container ({})", path, e)))?
            .parse2(passphrase)
            .map_err(|e| CertificateError::CertificateLoad(format!("{}: unable to decrypt PKCS#12 container ({})", path, e)))?;
        // Without a private key OpenSSL files every certificate under `ca`.
        let certificate = parsed
            .cert
            .or_else(|| parsed.ca.and_then(|ca| ca.into_iter().next()))
            .ok_or_else(|| {
                CertificateError::CertificateLoad(format!("{}: no certificate found in PKCS#12 container", path))
            })?;
        let der = certificate
            .to_der()
            .map_err(|e| CertificateError::CertificateLoad(format!("{}: {}", path, e)))?;
        let public_key = certificate
            .public_key()
            .map_err(|e| CertificateError::CertificateLoad(format!("{}: unreadable public key ({})", path, e)))?;
        let not_after = Self::asn1_to_utc(certificate.not_after())
            .map_err(|e| CertificateError::CertificateLoad(format!("{}: {}", path, e)))?;
        debug!(
            "[CERTIFICATE] Loaded {} ({} bytes DER, private key: {})",
            path,
            der.len(),
            parsed.pkey.is_some()
        );
        Ok(CertificateBundle {
            der,
            certificate,
            public_key,
            private_key: parsed.pkey,
            not_after,
            path: path.to_string(),
            loaded_at: Utc::now(),
        })
    }

    /// Rejects an empty path or passphrase with a `Configuration` error.
    pub fn validate_inputs(path: &str, passphrase: &str) -> Result<(), CertificateError> {
        if path.trim().is_empty() {
            return Err(CertificateError::Configuration(
                "PFX certificate path is not configured".to_string(),
            ));
        }
        if passphrase.is_empty() {
            return Err(CertificateError::Configuration(
                "PFX certificate password is not configured".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn asn1_to_utc(time: &Asn1TimeRef) -> Result<DateTime<Utc>, CertificateError> {
        let epoch = Asn1Time::from_unix(0)?;
        let diff = epoch.diff(time)?;
        let seconds = i64::from(diff.days) * 86_400 + i64::from(diff.secs);
        DateTime::<Utc>::from_timestamp(seconds, 0).ok_or_else(|| {
            CertificateError::Unexpected(format!("validity timestamp {} out of range", seconds))
        })
    }
}

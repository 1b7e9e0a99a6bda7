use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CertificateError {
    #[error("Certificate configuration error: {0}")]
    Configuration(String),
    #[error("Failed to load PKCS#12 certificate: {0}")]
    CertificateLoad(String),
    #[error("Unsupported certificate key: {0}")]
    KeyType(String),
    #[error("Unexpected certificate error: {0}")]
    Unexpected(String),
}

use crate::certificate::enums::certificate_error::CertificateError;

impl CertificateError {
    /// Stable machine-readable name, used as the `status` field of error
    /// responses and as the error label in metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            CertificateError::Configuration(_) => "configuration_error",
            CertificateError::CertificateLoad(_) => "certificate_load_error",
            CertificateError::KeyType(_) => "key_type_error",
            CertificateError::Unexpected(_) => "unexpected_error",
        }
    }

    /// Whether the caller (or the operator) can fix the condition without a
    /// change to the certificate itself.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, CertificateError::Configuration(_))
    }

    pub fn message(&self) -> &str {
        match self {
            CertificateError::Configuration(message)
            | CertificateError::CertificateLoad(message)
            | CertificateError::KeyType(message)
            | CertificateError::Unexpected(message) => message,
        }
    }
}

impl From<openssl::error::ErrorStack> for CertificateError {
    fn from(error: openssl::error::ErrorStack) -> Self {
        CertificateError::Unexpected(error.to_string())
    }
}

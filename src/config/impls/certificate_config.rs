use crate::config::structs::certificate_config::CertificateConfig;

impl std::fmt::Debug for CertificateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let passphrase = if self.passphrase.is_empty() { "<empty>" } else { "<redacted>" };
        f.debug_struct("CertificateConfig")
            .field("path", &self.path)
            .field("passphrase", &passphrase)
            .field("thumbprint_algorithm", &self.thumbprint_algorithm)
            .finish()
    }
}

impl CertificateConfig {
    pub fn new(path: &str, passphrase: &str) -> CertificateConfig {
        CertificateConfig {
            path: path.to_string(),
            passphrase: passphrase.to_string(),
            thumbprint_algorithm: Default::default(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.path.trim().is_empty() && !self.passphrase.is_empty()
    }
}

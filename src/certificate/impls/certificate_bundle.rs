use crate::certificate::structs::certificate_bundle::CertificateBundle;
use openssl::pkey::Id;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("der_len", &self.der.len())
            .field("key_type", &self.key_type())
            .field("has_private_key", &self.private_key.is_some())
            .field("not_after", &self.not_after)
            .field("path", &self.path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificateBundle {
    pub fn key_type(&self) -> &'static str {
        let id = self.public_key.id();
        if id == Id::RSA {
            "RSA"
        } else if id == Id::EC {
            "EC"
        } else if id == Id::DSA {
            "DSA"
        } else {
            "unknown"
        }
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }
}

use crate::certificate::structs::certificate_metadata::CertificateMetadata;
use crate::certificate::structs::jwk::Jwk;

#[derive(Debug, Clone)]
pub struct CertificateDocument {
    pub der: Vec<u8>,
    pub metadata: CertificateMetadata,
}

#[derive(Debug, Clone)]
pub struct JwkDocument {
    pub jwk: Jwk,
    pub metadata: CertificateMetadata,
}

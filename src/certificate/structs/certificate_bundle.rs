use openssl::pkey::{
    PKey,
    Private,
    Public
};
use openssl::x509::X509;

pub struct CertificateBundle {
    pub der: Vec<u8>,
    pub certificate: X509,
    pub public_key: PKey<Public>,
    pub private_key: Option<PKey<Private>>,
    pub not_after: chrono::DateTime<chrono::Utc>,
    pub path: String,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

use crate::certificate::enums::certificate_error::CertificateError;
use crate::certificate::structs::certificate_bundle::CertificateBundle;
use crate::certificate::structs::certificate_metadata::CertificateMetadata;
use crate::certificate::structs::rsa_key_material::RsaKeyMaterial;

/// Everything derived from one load of a PKCS#12 file.
///
/// A bundle without a usable RSA private key still produces a snapshot;
/// the extraction failure is kept so the DER certificate stays servable.
#[derive(Debug)]
pub struct CertificateSnapshot {
    pub bundle: CertificateBundle,
    pub metadata: CertificateMetadata,
    pub key_material: Result<RsaKeyMaterial, CertificateError>,
}

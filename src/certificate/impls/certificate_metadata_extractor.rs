use crate::certificate::enums::certificate_error::CertificateError;
use crate::certificate::enums::thumbprint_algorithm::ThumbprintAlgorithm;
use crate::certificate::structs::certificate_bundle::CertificateBundle;
use crate::certificate::structs::certificate_metadata::CertificateMetadata;
use crate::certificate::structs::certificate_metadata_extractor::CertificateMetadataExtractor;
use crate::common::common::{
    base64url_encode,
    format_utc_timestamp,
    sha256
};

impl CertificateMetadataExtractor {
    #[tracing::instrument(level = "debug")]
    pub fn describe(
        bundle: &CertificateBundle,
        algorithm: ThumbprintAlgorithm,
    ) -> Result<CertificateMetadata, CertificateError> {
        Ok(CertificateMetadata {
            thumbprint: base64url_encode(&algorithm.digest(&bundle.der)),
            thumbprint_algorithm: algorithm,
            serial_number: Self::serial_number(&bundle.der).map_err(|e| {
                CertificateError::Unexpected(format!("{}: {}", bundle.path, e))
            })?,
            not_after: format_utc_timestamp(&bundle.not_after),
            certificate_sha256: sha256(&bundle.der),
        })
    }

    /// Serial number content octets as stored in the DER encoding, including
    /// a leading zero octet when the encoder added one for the sign bit.
    pub fn serial_number(der: &[u8]) -> Result<String, String> {
        let (_, certificate) = x509_parser::parse_x509_certificate(der)
            .map_err(|e| format!("malformed certificate ({})", e))?;
        Ok(hex::encode_upper(certificate.raw_serial()))
    }
}

use crate::certificate::enums::thumbprint_algorithm::ThumbprintAlgorithm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateMetadata {
    /// Base64url digest of the DER certificate, see `thumbprint_algorithm`.
    pub thumbprint: String,
    pub thumbprint_algorithm: ThumbprintAlgorithm,
    /// Uppercase hex of the serial number content octets.
    pub serial_number: String,
    /// `yyyy-MM-ddTHH:mm:ssZ`, UTC.
    pub not_after: String,
    /// SHA-256 of the DER certificate, the source of the JWK `x5t#S256`.
    pub certificate_sha256: [u8; 32],
}

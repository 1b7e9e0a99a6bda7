use crate::certificate::enums::certificate_error::CertificateError;
use crate::certificate::structs::certificate_metadata::CertificateMetadata;
use crate::certificate::structs::jwk::Jwk;
use crate::certificate::structs::jwk_encoder::JwkEncoder;
use crate::certificate::structs::rsa_key_material::RsaKeyMaterial;
use crate::common::common::{
    base64url_encode,
    sha256
};

impl JwkEncoder {
    /// Renders the key material as a private RSA JWK bound to the
    /// certificate through `x5t#S256`.
    ///
    /// Refuses to emit a public-only key: every private parameter must be
    /// present.
    pub fn encode(material: &RsaKeyMaterial, metadata: &CertificateMetadata) -> Result<Jwk, CertificateError> {
        let missing: Vec<&str> = [
            ("n", &material.n),
            ("e", &material.e),
            ("d", &material.d),
            ("p", &material.p),
            ("q", &material.q),
            ("dp", &material.dp),
            ("dq", &material.dq),
            ("qi", &material.qi),
        ]
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(CertificateError::KeyType(format!(
                "RSA key material is incomplete, missing: {}",
                missing.join(", ")
            )));
        }
        Ok(Jwk {
            kty: "RSA",
            key_use: "sig",
            e: base64url_encode(&material.e),
            n: base64url_encode(&material.n),
            d: base64url_encode(&material.d),
            p: base64url_encode(&material.p),
            q: base64url_encode(&material.q),
            dp: base64url_encode(&material.dp),
            dq: base64url_encode(&material.dq),
            qi: base64url_encode(&material.qi),
            x5t_s256: base64url_encode(&metadata.certificate_sha256),
        })
    }

    /// JWK `x5t#S256` value of a DER certificate.
    pub fn x5t_s256(der: &[u8]) -> String {
        base64url_encode(&sha256(der))
    }
}

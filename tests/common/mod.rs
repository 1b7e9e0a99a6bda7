#![allow(dead_code)]
use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::ec::{EcGroup, EcKey};
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::{PKey, Private};
use openssl::rsa::Rsa;
use openssl::x509::{X509, X509NameBuilder};
use private_jwk::api::structs::api_service_data::ApiServiceData;
use private_jwk::cache::structs::certificate_cache::CertificateCache;
use private_jwk::certificate::structs::certificate_pipeline::CertificatePipeline;
use private_jwk::config::structs::api_server_config::ApiServerConfig;
use private_jwk::config::structs::certificate_config::CertificateConfig;
use private_jwk::stats::structs::stats_recorder::StatsRecorder;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub const PASSPHRASE: &str = "integration passphrase";
pub const NOT_AFTER_UNIX: i64 = 1_924_992_000;
pub const NOT_AFTER_TEXT: &str = "2031-01-01T00:00:00Z";
pub const SERIAL: [u8; 4] = [0x12, 0x34, 0xAB, 0xCD];
pub const SERIAL_HEX: &str = "1234ABCD";

pub struct TestCertificate {
    pub dir: TempDir,
    pub path: String,
    pub rsa: Rsa<Private>,
    pub certificate: X509,
}

pub fn self_signed(pkey: &PKey<Private>) -> X509 {
    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_nid(Nid::COMMONNAME, "private-jwk integration").unwrap();
    let name = name.build();
    let serial = BigNum::from_slice(&SERIAL).unwrap().to_asn1_integer().unwrap();
    let mut builder = X509::builder().unwrap();
    builder.set_version(2).unwrap();
    builder.set_serial_number(&serial).unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_pubkey(pkey).unwrap();
    builder.set_not_before(&Asn1Time::days_from_now(0).unwrap()).unwrap();
    builder.set_not_after(&Asn1Time::from_unix(NOT_AFTER_UNIX).unwrap()).unwrap();
    builder.sign(pkey, MessageDigest::sha256()).unwrap();
    builder.build()
}

fn write_pkcs12(dir: &Path, name: &str, pkcs12: Pkcs12) -> String {
    let path = dir.join(name);
    std::fs::write(&path, pkcs12.to_der().unwrap()).unwrap();
    path.to_str().unwrap().to_string()
}

/// RSA-2048 certificate with its private key, in a fresh temporary directory.
pub fn create_rsa_certificate() -> TestCertificate {
    let dir = TempDir::new().unwrap();
    let rsa = Rsa::generate(2048).unwrap();
    let pkey = PKey::from_rsa(rsa.clone()).unwrap();
    let certificate = self_signed(&pkey);
    let pkcs12 = Pkcs12::builder()
        .name("private-jwk")
        .pkey(&pkey)
        .cert(&certificate)
        .build2(PASSPHRASE)
        .unwrap();
    let path = write_pkcs12(dir.path(), "certificate.pfx", pkcs12);
    TestCertificate { dir, path, rsa, certificate }
}

/// Bundle without a private key.
pub fn create_public_only_certificate() -> TestCertificate {
    let dir = TempDir::new().unwrap();
    let rsa = Rsa::generate(2048).unwrap();
    let pkey = PKey::from_rsa(rsa.clone()).unwrap();
    let certificate = self_signed(&pkey);
    let pkcs12 = Pkcs12::builder()
        .name("private-jwk")
        .cert(&certificate)
        .build2(PASSPHRASE)
        .unwrap();
    let path = write_pkcs12(dir.path(), "public.pfx", pkcs12);
    TestCertificate { dir, path, rsa, certificate }
}

/// P-256 certificate with its private key. Returns the directory and path.
pub fn create_ec_certificate() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1).unwrap();
    let pkey = PKey::from_ec_key(EcKey::generate(&group).unwrap()).unwrap();
    let certificate = self_signed(&pkey);
    let pkcs12 = Pkcs12::builder()
        .name("private-jwk")
        .pkey(&pkey)
        .cert(&certificate)
        .build2(PASSPHRASE)
        .unwrap();
    let path = write_pkcs12(dir.path(), "ec.pfx", pkcs12);
    (dir, path)
}

pub fn create_test_api_config() -> Arc<ApiServerConfig> {
    Arc::new(ApiServerConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        keep_alive: Some(5),
        request_timeout: Some(10),
        disconnect_timeout: Some(5),
        threads: Some(1),
    })
}

/// Service data wired to a real `StatsRecorder`, returned alongside so tests
/// can inspect the counters.
pub fn create_service_data(
    certificate_config: CertificateConfig,
    cache: Option<Arc<CertificateCache>>,
) -> (Arc<ApiServiceData>, Arc<StatsRecorder>) {
    let recorder = Arc::new(StatsRecorder::new());
    let pipeline = Arc::new(CertificatePipeline::new(Arc::new(certificate_config), cache));
    let data = Arc::new(ApiServiceData::new(pipeline, recorder.clone(), create_test_api_config()));
    (data, recorder)
}

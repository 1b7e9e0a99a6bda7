//! PKCS#12 bundles generated at test time.

use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::ec::{EcGroup, EcKey};
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::{PKey, Private};
use openssl::rsa::Rsa;
use openssl::x509::{X509, X509NameBuilder};
use std::path::Path;

pub(crate) const PASSPHRASE: &str = "correct horse battery staple";

/// 2031-01-01T00:00:00Z
pub(crate) const NOT_AFTER_UNIX: i64 = 1_924_992_000;
pub(crate) const NOT_AFTER_TEXT: &str = "2031-01-01T00:00:00Z";

/// Serial with the high bit set so DER adds a leading zero octet.
pub(crate) const SERIAL: [u8; 8] = [0x81, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
pub(crate) const SERIAL_HEX: &str = "008123456789ABCDEF";

pub(crate) fn self_signed(pkey: &PKey<Private>) -> X509 {
    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_nid(Nid::COMMONNAME, "private-jwk test").unwrap();
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

pub(crate) fn rsa_key() -> Rsa<Private> {
    Rsa::generate(2048).unwrap()
}

fn write(dir: &Path, name: &str, der: Vec<u8>) -> String {
    let path = dir.join(name);
    std::fs::write(&path, der).unwrap();
    path.to_str().unwrap().to_string()
}

/// Writes an RSA certificate with its private key and returns the path.
pub(crate) fn write_rsa_pfx(dir: &Path, name: &str, rsa: &Rsa<Private>, passphrase: &str) -> String {
    let pkey = PKey::from_rsa(rsa.clone()).unwrap();
    let certificate = self_signed(&pkey);
    let pkcs12 = Pkcs12::builder()
        .name("private-jwk")
        .pkey(&pkey)
        .cert(&certificate)
        .build2(passphrase)
        .unwrap();
    write(dir, name, pkcs12.to_der().unwrap())
}

/// Writes a bundle holding only the certificate, no private key.
pub(crate) fn write_public_only_pfx(dir: &Path, name: &str, rsa: &Rsa<Private>, passphrase: &str) -> String {
    let pkey = PKey::from_rsa(rsa.clone()).unwrap();
    let certificate = self_signed(&pkey);
    let pkcs12 = Pkcs12::builder()
        .name("private-jwk")
        .cert(&certificate)
        .build2(passphrase)
        .unwrap();
    write(dir, name, pkcs12.to_der().unwrap())
}

/// Writes a P-256 certificate with its private key.
pub(crate) fn write_ec_pfx(dir: &Path, name: &str, passphrase: &str) -> String {
    let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1).unwrap();
    let pkey = PKey::from_ec_key(EcKey::generate(&group).unwrap()).unwrap();
    let certificate = self_signed(&pkey);
    let pkcs12 = Pkcs12::builder()
        .name("private-jwk")
        .pkey(&pkey)
        .cert(&certificate)
        .build2(passphrase)
        .unwrap();
    write(dir, name, pkcs12.to_der().unwrap())
}

mod common;

use private_jwk::cache::structs::certificate_cache::CertificateCache;
use private_jwk::certificate::enums::certificate_error::CertificateError;
use private_jwk::certificate::structs::certificate_pipeline::CertificatePipeline;
use private_jwk::config::structs::certificate_config::CertificateConfig;
use std::fs;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

#[test]
fn test_cached_pipeline_picks_up_replaced_file() {
    let first = common::create_rsa_certificate();
    let second = common::create_rsa_certificate();
    let cache = Arc::new(CertificateCache::new(None, true));
    let pipeline = CertificatePipeline::new(
        Arc::new(CertificateConfig::new(&first.path, common::PASSPHRASE)),
        Some(cache.clone()),
    );

    let before = pipeline.jwk().unwrap();
    assert_eq!(pipeline.jwk().unwrap().jwk, before.jwk);
    assert_eq!(cache.len(), 1);

    fs::copy(&second.path, &first.path).unwrap();
    let file = fs::File::options().write(true).open(&first.path).unwrap();
    file.set_modified(SystemTime::now() + Duration::from_secs(5)).unwrap();

    let after = pipeline.jwk().unwrap();
    assert_ne!(after.jwk.n, before.jwk.n, "Replaced file should be reloaded");
    assert_eq!(pipeline.certificate().unwrap().der, second.certificate.to_der().unwrap());
}

#[test]
fn test_cached_pipeline_without_watch_keeps_entry() {
    let first = common::create_rsa_certificate();
    let second = common::create_rsa_certificate();
    let cache = Arc::new(CertificateCache::new(None, false));
    let pipeline = CertificatePipeline::new(
        Arc::new(CertificateConfig::new(&first.path, common::PASSPHRASE)),
        Some(cache.clone()),
    );

    let before = pipeline.jwk().unwrap();
    fs::copy(&second.path, &first.path).unwrap();
    assert_eq!(pipeline.jwk().unwrap().jwk.n, before.jwk.n);

    assert!(cache.invalidate(&first.path));
    assert_ne!(pipeline.jwk().unwrap().jwk.n, before.jwk.n);
}

#[test]
fn test_cached_public_only_bundle() {
    let fixture = common::create_public_only_certificate();
    let cache = Arc::new(CertificateCache::new(Some(Duration::from_secs(60)), true));
    let pipeline = CertificatePipeline::new(
        Arc::new(CertificateConfig::new(&fixture.path, common::PASSPHRASE)),
        Some(cache.clone()),
    );

    assert!(pipeline.certificate().is_ok());
    assert!(matches!(pipeline.jwk(), Err(CertificateError::KeyType(_))));
    assert!(matches!(pipeline.jwk(), Err(CertificateError::KeyType(_))));
    assert_eq!(cache.len(), 1, "Bundle stays cached even without a private key");
}

#[test]
fn test_cached_load_failure_is_not_stored() {
    let fixture = common::create_rsa_certificate();
    let cache = Arc::new(CertificateCache::new(None, true));
    let pipeline = CertificatePipeline::new(
        Arc::new(CertificateConfig::new(&fixture.path, "wrong passphrase")),
        Some(cache.clone()),
    );

    assert!(matches!(pipeline.certificate(), Err(CertificateError::CertificateLoad(_))));
    assert!(cache.is_empty());
}

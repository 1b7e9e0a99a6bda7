use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::certificate_cache::CertificateCache;
use crate::certificate::enums::certificate_error::CertificateError;
use crate::certificate::structs::certificate_document::{
    CertificateDocument,
    JwkDocument
};
use crate::certificate::structs::certificate_loader::CertificateLoader;
use crate::certificate::structs::certificate_metadata_extractor::CertificateMetadataExtractor;
use crate::certificate::structs::certificate_pipeline::CertificatePipeline;
use crate::certificate::structs::certificate_snapshot::CertificateSnapshot;
use crate::certificate::structs::jwk_encoder::JwkEncoder;
use crate::certificate::structs::rsa_key_extractor::RsaKeyExtractor;
use crate::config::structs::certificate_config::CertificateConfig;
use log::warn;
use std::sync::Arc;

impl std::fmt::Debug for CertificatePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificatePipeline")
            .field("certificate_config", &self.certificate_config)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

impl CertificatePipeline {
    pub fn new(certificate_config: Arc<CertificateConfig>, cache: Option<Arc<CertificateCache>>) -> Self {
        Self {
            certificate_config,
            cache,
        }
    }

    pub fn certificate_config(&self) -> &CertificateConfig {
        &self.certificate_config
    }

    pub fn cache(&self) -> Option<&Arc<CertificateCache>> {
        self.cache.as_ref()
    }

    /// DER certificate with its metadata. Does not touch the private key
    /// when running uncached.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn certificate(&self) -> Result<CertificateDocument, CertificateError> {
        let config = &self.certificate_config;
        CertificateLoader::validate_inputs(&config.path, &config.passphrase)?;
        if let Some(cache) = &self.cache {
            let entry = self.cached(cache)?;
            return Ok(CertificateDocument {
                der: entry.snapshot.bundle.der.clone(),
                metadata: entry.snapshot.metadata.clone(),
            });
        }
        let bundle = CertificateLoader::load(&config.path, &config.passphrase)?;
        let metadata = CertificateMetadataExtractor::describe(&bundle, config.thumbprint_algorithm)?;
        Ok(CertificateDocument {
            der: bundle.der,
            metadata,
        })
    }

    /// Private JWK with the certificate metadata. The extracted key
    /// material is dropped, and wiped, before this returns.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn jwk(&self) -> Result<JwkDocument, CertificateError> {
        let config = &self.certificate_config;
        CertificateLoader::validate_inputs(&config.path, &config.passphrase)?;
        if let Some(cache) = &self.cache {
            let entry = self.cached(cache)?;
            let material = entry.snapshot.key_material.as_ref().map_err(Clone::clone)?;
            let jwk = JwkEncoder::encode(material, &entry.snapshot.metadata)?;
            return Ok(JwkDocument {
                jwk,
                metadata: entry.snapshot.metadata.clone(),
            });
        }
        let bundle = CertificateLoader::load(&config.path, &config.passphrase)?;
        let metadata = CertificateMetadataExtractor::describe(&bundle, config.thumbprint_algorithm)?;
        let material = RsaKeyExtractor::extract(&bundle)?;
        let jwk = JwkEncoder::encode(&material, &metadata)?;
        Ok(JwkDocument { jwk, metadata })
    }

    /// Runs the whole chain once, keeping an extraction failure inside the
    /// snapshot instead of failing the load.
    pub fn snapshot(config: &CertificateConfig) -> Result<CertificateSnapshot, CertificateError> {
        let bundle = CertificateLoader::load(&config.path, &config.passphrase)?;
        let metadata = CertificateMetadataExtractor::describe(&bundle, config.thumbprint_algorithm)?;
        let key_material = RsaKeyExtractor::extract(&bundle);
        if let Err(error) = &key_material {
            warn!("[CERTIFICATE] {} has no usable RSA private key: {}", config.path, error);
        }
        Ok(CertificateSnapshot {
            bundle,
            metadata,
            key_material,
        })
    }

    fn cached(&self, cache: &CertificateCache) -> Result<Arc<CacheEntry>, CertificateError> {
        let config = Arc::clone(&self.certificate_config);
        cache.get_or_load(&config.path, &config.passphrase, || Self::snapshot(&config))
    }
}

use crate::cache::structs::certificate_cache::CertificateCache;
use crate::config::structs::certificate_config::CertificateConfig;
use std::sync::Arc;

pub struct CertificatePipeline {
    pub(crate) certificate_config: Arc<CertificateConfig>,
    pub(crate) cache: Option<Arc<CertificateCache>>,
}

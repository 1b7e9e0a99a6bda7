/// Derives identity metadata from a loaded bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateMetadataExtractor;

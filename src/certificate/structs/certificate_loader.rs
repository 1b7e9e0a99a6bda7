/// Opens PKCS#12 containers from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateLoader;

/// Reads RSA parameters out of a loaded bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct RsaKeyExtractor;

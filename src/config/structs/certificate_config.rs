use crate::certificate::enums::thumbprint_algorithm::ThumbprintAlgorithm;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Where the PKCS#12 bundle lives and how to open it.
///
/// The passphrase is wiped on drop and redacted from `Debug`.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CertificateConfig {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub passphrase: String,
    #[serde(default)]
    #[zeroize(skip)]
    pub thumbprint_algorithm: ThumbprintAlgorithm,
}

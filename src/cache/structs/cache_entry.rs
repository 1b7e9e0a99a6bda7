use crate::certificate::structs::certificate_snapshot::CertificateSnapshot;
use std::time::{Instant, SystemTime};

pub struct CacheEntry {
    pub snapshot: CertificateSnapshot,
    pub modified: Option<SystemTime>,
    pub(crate) passphrase_digest: [u8; 32],
    pub loaded_at: Instant,
}

use crate::cache::structs::cache_entry::CacheEntry;
use std::time::{Duration, SystemTime};

impl std::fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheEntry")
            .field("snapshot", &self.snapshot)
            .field("modified", &self.modified)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CacheEntry {
    pub fn is_fresh(
        &self,
        passphrase_digest: &[u8; 32],
        modified: Option<SystemTime>,
        ttl: Option<Duration>,
        watch_modified: bool,
    ) -> bool {
        if &self.passphrase_digest != passphrase_digest {
            return false;
        }
        if ttl.is_some_and(|ttl| self.loaded_at.elapsed() >= ttl) {
            return false;
        }
        !watch_modified || self.modified == modified
    }
}

use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::certificate_cache::CertificateCache;
use crate::certificate::enums::certificate_error::CertificateError;
use crate::certificate::structs::certificate_snapshot::CertificateSnapshot;
use crate::common::common::sha256;
use crate::config::structs::cache_config::CacheConfig;
use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

impl std::fmt::Debug for CertificateCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.read();
        f.debug_struct("CertificateCache")
            .field("entries_count", &entries.len())
            .field("paths", &entries.keys().collect::<Vec<_>>())
            .field("ttl", &self.ttl)
            .field("watch_modified", &self.watch_modified)
            .finish()
    }
}

impl CertificateCache {
    pub fn new(ttl: Option<Duration>, watch_modified: bool) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            reload_locks: Mutex::new(HashMap::new()),
            ttl,
            watch_modified,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl.map(Duration::from_secs), config.watch_modified)
    }

    /// Returns the cached entry for `path`, running `loader` when there is
    /// none or it went stale. At most one loader runs per path at a time.
    pub fn get_or_load<F>(
        &self,
        path: &str,
        passphrase: &str,
        loader: F,
    ) -> Result<Arc<CacheEntry>, CertificateError>
    where
        F: FnOnce() -> Result<CertificateSnapshot, CertificateError>,
    {
        let passphrase_digest = sha256(passphrase.as_bytes());
        if let Some(entry) = self.fresh_entry(path, &passphrase_digest, self.modified(path)) {
            debug!("[CACHE] Hit for {path}");
            return Ok(entry);
        }

        let reload_lock = self.reload_lock(path);
        let _guard = reload_lock.lock();

        // Another request may have reloaded while we waited.
        let modified = self.modified(path);
        if let Some(entry) = self.fresh_entry(path, &passphrase_digest, modified) {
            debug!("[CACHE] Hit for {path} after waiting on reload");
            return Ok(entry);
        }

        match loader() {
            Ok(snapshot) => {
                let entry = Arc::new(CacheEntry {
                    snapshot,
                    modified,
                    passphrase_digest,
                    loaded_at: Instant::now(),
                });
                self.entries.write().insert(path.to_string(), Arc::clone(&entry));
                info!("[CACHE] Loaded {path}");
                Ok(entry)
            }
            Err(error) => {
                if self.entries.write().remove(path).is_some() {
                    warn!("[CACHE] Evicted {path} after failed reload: {}", error.kind());
                }
                Err(error)
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<Arc<CacheEntry>> {
        self.entries.read().get(path).cloned()
    }

    pub fn invalidate(&self, path: &str) -> bool {
        let removed = self.entries.write().remove(path).is_some();
        if removed {
            debug!("[CACHE] Invalidated {path}");
        }
        removed
    }

    pub fn clear(&self) {
        self.entries.write().clear();
        self.reload_locks.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn fresh_entry(
        &self,
        path: &str,
        passphrase_digest: &[u8; 32],
        modified: Option<SystemTime>,
    ) -> Option<Arc<CacheEntry>> {
        self.entries
            .read()
            .get(path)
            .filter(|entry| entry.is_fresh(passphrase_digest, modified, self.ttl, self.watch_modified))
            .cloned()
    }

    fn modified(&self, path: &str) -> Option<SystemTime> {
        if !self.watch_modified {
            return None;
        }
        std::fs::metadata(path).and_then(|metadata| metadata.modified()).ok()
    }

    fn reload_lock(&self, path: &str) -> Arc<Mutex<()>> {
        Arc::clone(
            self.reload_locks
                .lock()
                .entry(path.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }
}

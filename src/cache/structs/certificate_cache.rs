use crate::cache::structs::cache_entry::CacheEntry;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub struct CertificateCache {
    pub(crate) entries: RwLock<HashMap<String, Arc<CacheEntry>>>,
    pub(crate) reload_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    pub(crate) ttl: Option<Duration>,
    pub(crate) watch_modified: bool,
}

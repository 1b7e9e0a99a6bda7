use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Seconds an entry stays valid; `None` keeps it until the file changes.
    pub ttl: Option<u64>,
    pub watch_modified: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl: Some(300),
            watch_modified: true,
        }
    }
}

/// Shared cache keyed by certificate path.
pub mod certificate_cache;

/// One cached snapshot with its freshness markers.
pub mod cache_entry;

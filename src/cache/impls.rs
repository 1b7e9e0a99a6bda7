pub mod cache_entry;
pub mod certificate_cache;

use std::sync::atomic::{AtomicI64, AtomicU64};

/// Histogram bucket upper bounds in milliseconds.
pub const LATENCY_BUCKETS_MS: [u64; 10] = [1, 5, 10, 25, 50, 100, 250, 500, 1000, 2500];

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub requests_certificate: AtomicI64,
    pub requests_jwk: AtomicI64,
    pub requests_stats: AtomicI64,
    pub requests_not_found: AtomicI64,
    pub responses_2xx: AtomicI64,
    pub responses_4xx: AtomicI64,
    pub responses_5xx: AtomicI64,
    pub errors_configuration: AtomicI64,
    pub errors_certificate_load: AtomicI64,
    pub errors_key_type: AtomicI64,
    pub errors_unexpected: AtomicI64,
    /// Non-cumulative counts, the last slot is `+Inf`.
    pub latency_buckets: [AtomicU64; LATENCY_BUCKETS_MS.len() + 1],
    pub latency_count: AtomicU64,
    pub latency_sum_us: AtomicU64,
}

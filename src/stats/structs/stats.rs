use serde::{Deserialize, Serialize};
use crate::stats::structs::latency_bucket::LatencyBucket;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stats {
    pub started: i64,
    pub requests_certificate: i64,
    pub requests_jwk: i64,
    pub requests_stats: i64,
    pub requests_not_found: i64,
    pub responses_2xx: i64,
    pub responses_4xx: i64,
    pub responses_5xx: i64,
    pub errors_configuration: i64,
    pub errors_certificate_load: i64,
    pub errors_key_type: i64,
    pub errors_unexpected: i64,
    pub latency_buckets: Vec<LatencyBucket>,
    pub latency_count: u64,
    pub latency_sum_ms: f64,
}

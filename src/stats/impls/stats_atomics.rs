use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::Duration;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::latency_bucket::LatencyBucket;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::{StatsAtomics, LATENCY_BUCKETS_MS};

impl Default for StatsAtomics {
    fn default() -> Self {
        Self {
            started: AtomicI64::new(chrono::Utc::now().timestamp()),
            requests_certificate: AtomicI64::new(0),
            requests_jwk: AtomicI64::new(0),
            requests_stats: AtomicI64::new(0),
            requests_not_found: AtomicI64::new(0),
            responses_2xx: AtomicI64::new(0),
            responses_4xx: AtomicI64::new(0),
            responses_5xx: AtomicI64::new(0),
            errors_configuration: AtomicI64::new(0),
            errors_certificate_load: AtomicI64::new(0),
            errors_key_type: AtomicI64::new(0),
            errors_unexpected: AtomicI64::new(0),
            latency_buckets: std::array::from_fn(|_| AtomicU64::new(0)),
            latency_count: AtomicU64::new(0),
            latency_sum_us: AtomicU64::new(0),
        }
    }
}

impl StatsAtomics {
    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::RequestsCertificate => &self.requests_certificate,
            StatsEvent::RequestsJwk => &self.requests_jwk,
            StatsEvent::RequestsStats => &self.requests_stats,
            StatsEvent::RequestsNotFound => &self.requests_not_found,
            StatsEvent::Responses2xx => &self.responses_2xx,
            StatsEvent::Responses4xx => &self.responses_4xx,
            StatsEvent::Responses5xx => &self.responses_5xx,
            StatsEvent::ErrorsConfiguration => &self.errors_configuration,
            StatsEvent::ErrorsCertificateLoad => &self.errors_certificate_load,
            StatsEvent::ErrorsKeyType => &self.errors_key_type,
            StatsEvent::ErrorsUnexpected => &self.errors_unexpected,
        }
    }

    pub fn update(&self, event: StatsEvent, value: i64) {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn observe(&self, duration: Duration) {
        let slot = LATENCY_BUCKETS_MS
            .iter()
            .position(|bound| duration <= Duration::from_millis(*bound))
            .unwrap_or(LATENCY_BUCKETS_MS.len());
        self.latency_buckets[slot].fetch_add(1, Ordering::SeqCst);
        self.latency_count.fetch_add(1, Ordering::SeqCst);
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        self.latency_sum_us.fetch_add(micros, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Stats {
        let mut cumulative = 0u64;
        let latency_buckets = self.latency_buckets
            .iter()
            .enumerate()
            .map(|(index, bucket)| {
                cumulative += bucket.load(Ordering::SeqCst);
                LatencyBucket {
                    le_ms: LATENCY_BUCKETS_MS.get(index).copied(),
                    count: cumulative,
                }
            })
            .collect();
        Stats {
            started: self.started.load(Ordering::SeqCst),
            requests_certificate: self.requests_certificate.load(Ordering::SeqCst),
            requests_jwk: self.requests_jwk.load(Ordering::SeqCst),
            requests_stats: self.requests_stats.load(Ordering::SeqCst),
            requests_not_found: self.requests_not_found.load(Ordering::SeqCst),
            responses_2xx: self.responses_2xx.load(Ordering::SeqCst),
            responses_4xx: self.responses_4xx.load(Ordering::SeqCst),
            responses_5xx: self.responses_5xx.load(Ordering::SeqCst),
            errors_configuration: self.errors_configuration.load(Ordering::SeqCst),
            errors_certificate_load: self.errors_certificate_load.load(Ordering::SeqCst),
            errors_key_type: self.errors_key_type.load(Ordering::SeqCst),
            errors_unexpected: self.errors_unexpected.load(Ordering::SeqCst),
            latency_buckets,
            latency_count: self.latency_count.load(Ordering::SeqCst),
            latency_sum_ms: self.latency_sum_us.load(Ordering::SeqCst) as f64 / 1000.0,
        }
    }
}
